// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Loosely typed values, as they are passed in and out of a patching host.

use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer
    Int(i64),
    /// A float
    Float(f64),
    /// A string, e.g. a ratio like `3/2`
    Str(String),
    /// A boolean
    Bool(bool),
    /// Absence of a value, also used for omitted optional arguments
    Nil,
    /// An ordered, possibly nested, sequence of values
    List(Vec<Value>),
}

impl Value {
    /// Name of the kind of value, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bool(_) => "bool",
            Value::Nil => "nil",
            Value::List(_) => "list",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Interpret the value as a number, accepting ints and floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(x) => Some(*x as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// Interpret the value as an integer. Floats are accepted if they are integral,
    /// since many hosts only know about floats.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(x) => Some(*x),
            Value::Float(x) if x.fract() == 0.0 && x.abs() < i64::MAX as f64 => Some(*x as i64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Apply `f` to every leaf of a (possibly nested) list, preserving its shape.
    /// Non-list values are leaves themselves.
    pub fn map_leaves<F>(&self, f: &mut F) -> Result<Value>
    where
        F: FnMut(&Value) -> Result<Value>,
    {
        match self {
            Value::List(items) => items
                .iter()
                .map(|item| item.map_leaves(f))
                .collect::<Result<Vec<_>>>()
                .map(Value::List),
            leaf => f(leaf),
        }
    }

    /// Extract a flat list of numbers, as used for pitch collections.
    pub fn to_f64_vec(&self, operation: &'static str) -> Result<Vec<f64>> {
        let numbers_expected = |found: &Value| Error::Type {
            operation,
            accepted: "lists of ints and floats",
            found: found.kind_name(),
        };
        self.as_list()
            .ok_or_else(|| numbers_expected(self))?
            .iter()
            .map(|item| item.as_f64().ok_or_else(|| numbers_expected(item)))
            .collect()
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<i64> for Value {
    fn from(x: i64) -> Self {
        Value::Int(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::pretty::pretty(self))
    }
}
