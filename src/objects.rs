// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Named objects binding the toolkit to a patching host.
//!
//! A host hands over loosely typed arguments and expects either a value for its outlet or
//! nothing at all. Messages, e.g. from `modulationnotes`, go to the host's reporter.

use crate::convert::{ratios_to_midicents, DEFAULT_FUNDAMENTAL};
use crate::diamond::Diamond;
use crate::error::{Error, Result};
use crate::modulation::{find_modulations, Reporter};
use crate::pitch::{freq_to_midicent, midicent_to_freq};
use crate::reduce::{octave_reduce, range_reduce, DEFAULT_OCTAVE};
use crate::value::Value;

pub type ObjectFn = fn(&Args, &mut dyn Reporter) -> Result<Option<Value>>;

/// An operation as it is registered with the host.
pub struct Object {
    pub name: &'static str,
    /// Argument list shown in errors and listings
    pub usage: &'static str,
    pub help: &'static str,
    /// Whether the object sends a value to its outlet.
    pub has_output: bool,
    pub run: ObjectFn,
}

pub static OBJECTS: &[Object] = &[
    // Utilities
    Object {
        name: "rt2mc",
        usage: "rt2mc <ratios> [fundamental]",
        help: "convert ratios to MIDI cents above a fundamental in MIDI cents",
        has_output: true,
        run: obj_rt2mc,
    },
    Object {
        name: "octavereduce",
        usage: "octavereduce <ratios> [octave]",
        help: "bring ratios into the span from 1 to octave",
        has_output: true,
        run: obj_octavereduce,
    },
    Object {
        name: "rangereduce",
        usage: "rangereduce <midicents> <down> <up>",
        help: "fold MIDI cents into the window from down to up",
        has_output: true,
        run: obj_rangereduce,
    },
    Object {
        name: "mc2f",
        usage: "mc2f <midicents>",
        help: "convert MIDI cents to frequencies",
        has_output: true,
        run: obj_mc2f,
    },
    Object {
        name: "f2mc",
        usage: "f2mc <frequencies>",
        help: "convert frequencies to MIDI cents",
        has_output: true,
        run: obj_f2mc,
    },
    // Harry Partch
    Object {
        name: "diamond",
        usage: "diamond <limit>",
        help: "otonal and utonal matrices of the diamond of odd identities up to limit",
        has_output: true,
        run: obj_diamond,
    },
    Object {
        name: "diamond-identity",
        usage: "diamond-identity <identities>",
        help: "otonal and utonal matrices of the diamond of the given identities",
        has_output: true,
        run: obj_diamond_identity,
    },
    // Modulation
    Object {
        name: "modulationnotes",
        usage: "modulationnotes <midicents> <midicents> <cents>",
        help: "report notes of two structures that are less than cents apart",
        has_output: false,
        run: obj_modulationnotes,
    },
    Object {
        name: "modnotes",
        usage: "modnotes <midicents> <midicents> <cents>",
        help: "alias of modulationnotes",
        has_output: false,
        run: obj_modulationnotes,
    },
];

/// Look up an object by name.
pub fn find(name: &str) -> Option<&'static Object> {
    OBJECTS.iter().find(|obj| obj.name == name)
}

/// Run the object called `name` with the given arguments.
///
/// # Examples
///
/// ```
/// use ji_toolkit::objects::invoke;
/// use ji_toolkit::modulation::LogReporter;
/// use ji_toolkit::value::Value;
///
/// let out = invoke("octavereduce", &[Value::from("9/1")], &mut LogReporter).unwrap();
/// assert_eq!(out, Some(Value::from("9/8")));
/// assert!(invoke("nope", &[], &mut LogReporter).is_err());
/// ```
pub fn invoke(name: &str, args: &[Value], reporter: &mut dyn Reporter) -> Result<Option<Value>> {
    let object = find(name).ok_or_else(|| Error::UnknownObject {
        name: name.to_owned(),
    })?;
    object.invoke(args, reporter)
}

impl Object {
    pub fn invoke(&self, args: &[Value], reporter: &mut dyn Reporter) -> Result<Option<Value>> {
        log::debug!("invoking {} with {} arguments", self.name, args.len());
        let out = (self.run)(&Args::new(self, args), reporter)?;
        debug_assert_eq!(out.is_some(), self.has_output);
        Ok(out)
    }
}

/// Arguments of an object invocation.
pub struct Args<'a> {
    object: &'a Object,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn new(object: &'a Object, values: &'a [Value]) -> Self {
        Self { object, values }
    }

    fn arity_error(&self) -> Error {
        Error::Arity {
            usage: self.object.usage,
        }
    }

    /// Fail unless there are between `min` and `max` arguments.
    fn expect_count(&self, min: usize, max: usize) -> Result<()> {
        if self.values.len() < min || self.values.len() > max {
            Err(self.arity_error())
        } else {
            Ok(())
        }
    }

    fn get(&self, index: usize) -> Result<&'a Value> {
        self.values.get(index).ok_or_else(|| self.arity_error())
    }

    /// An optional argument, treating `nil` like a missing one.
    fn optional(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index).filter(|v| !v.is_nil())
    }

    fn number(&self, value: &Value) -> Result<f64> {
        value.as_f64().ok_or_else(|| Error::Type {
            operation: self.object.name,
            accepted: "ints and floats",
            found: value.kind_name(),
        })
    }

    fn optional_number(&self, index: usize, default: f64) -> Result<f64> {
        self.optional(index)
            .map_or(Ok(default), |value| self.number(value))
    }

    fn integer(&self, value: &Value) -> Result<i64> {
        value.as_i64().ok_or_else(|| Error::Type {
            operation: self.object.name,
            accepted: "integers",
            found: value.kind_name(),
        })
    }
}

fn obj_rt2mc(args: &Args, _: &mut dyn Reporter) -> Result<Option<Value>> {
    args.expect_count(1, 2)?;
    let fundamental = args.optional_number(1, DEFAULT_FUNDAMENTAL)?;
    ratios_to_midicents(args.get(0)?, fundamental).map(Some)
}

fn obj_octavereduce(args: &Args, _: &mut dyn Reporter) -> Result<Option<Value>> {
    args.expect_count(1, 2)?;
    let octave = args.optional_number(1, DEFAULT_OCTAVE)?;
    octave_reduce(args.get(0)?, octave).map(Some)
}

fn obj_rangereduce(args: &Args, _: &mut dyn Reporter) -> Result<Option<Value>> {
    args.expect_count(3, 3)?;
    let down = args.number(args.get(1)?)?;
    let up = args.number(args.get(2)?)?;
    range_reduce(args.get(0)?, down, up).map(Some)
}

fn obj_mc2f(args: &Args, _: &mut dyn Reporter) -> Result<Option<Value>> {
    args.expect_count(1, 1)?;
    args.get(0)?
        .map_leaves(&mut |leaf: &Value| Ok(Value::Float(midicent_to_freq(args.number(leaf)?))))
        .map(Some)
}

fn obj_f2mc(args: &Args, _: &mut dyn Reporter) -> Result<Option<Value>> {
    args.expect_count(1, 1)?;
    args.get(0)?
        .map_leaves(&mut |leaf: &Value| Ok(Value::Float(freq_to_midicent(args.number(leaf)?)?)))
        .map(Some)
}

fn obj_diamond(args: &Args, _: &mut dyn Reporter) -> Result<Option<Value>> {
    args.expect_count(1, 1)?;
    let limit = args.integer(args.get(0)?)?;
    Ok(Some(Diamond::new(limit)?.into_value()))
}

fn obj_diamond_identity(args: &Args, _: &mut dyn Reporter) -> Result<Option<Value>> {
    args.expect_count(1, 1)?;
    let list = args.get(0)?;
    let items = list.as_list().ok_or_else(|| Error::Type {
        operation: "diamond-identity",
        accepted: "lists of integers",
        found: list.kind_name(),
    })?;
    let identities = items
        .iter()
        .map(|item| args.integer(item))
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(Diamond::from_identities(&identities)?.into_value()))
}

fn obj_modulationnotes(args: &Args, reporter: &mut dyn Reporter) -> Result<Option<Value>> {
    args.expect_count(3, 3)?;
    let from = args.get(0)?.to_f64_vec("modulationnotes")?;
    let to = args.get(1)?.to_f64_vec("modulationnotes")?;
    let cents = args.number(args.get(2)?)?;
    find_modulations(&from, &to, cents, reporter);
    Ok(None)
}
