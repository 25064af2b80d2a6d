// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Printing values in the syntax understood by [`crate::parse`].

use super::value::*;
use std::fmt::Write;

struct PrettyPrinter {
    output: String,
    indent: usize,
}

impl PrettyPrinter {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent: 0,
        }
    }

    fn print(&mut self, value: &Value) {
        match value {
            Value::Int(x) => write!(&mut self.output, "{}", x).unwrap(),
            // Debug keeps the trailing `.0`, so the value reads back as a float
            Value::Float(x) => write!(&mut self.output, "{:?}", x).unwrap(),
            Value::Str(x) => self.print_str(x),
            Value::Bool(x) => write!(&mut self.output, "{}", x).unwrap(),
            Value::Nil => self.output.push_str("nil"),
            Value::List(items) => self.print_list(items),
        }
    }

    fn print_str(&mut self, s: &str) {
        let bare = !s.is_empty()
            && !s.contains(|c: char| c.is_whitespace() || c == '[' || c == ']' || c == '"')
            && matches!(crate::parse::parse_value(s), Ok(Value::Str(_)));
        if bare {
            self.output.push_str(s);
        } else {
            write!(&mut self.output, "{:?}", s).unwrap();
        }
    }

    fn print_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push(' ');
        }
    }

    fn print_list(&mut self, items: &[Value]) {
        // Flat lists stay on one line, nested ones get one element per line.
        let separate_lines = items.iter().any(|item| matches!(item, Value::List(_)));

        self.output.push('[');
        self.indent += 1;
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                if separate_lines {
                    self.output.push('\n');
                    self.print_indent();
                } else {
                    self.output.push(' ');
                }
            }
            self.print(item);
        }
        self.output.push(']');
        self.indent -= 1;
    }
}

pub fn pretty(value: &Value) -> String {
    let mut printer = PrettyPrinter::new();
    printer.print(value);
    printer.output
}
