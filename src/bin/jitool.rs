// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `jitool` - runs the toolkit objects from the command line, the way a patch would.

use std::io;

use simple_logger;
use structopt::StructOpt;

use ji_toolkit::modulation::Reporter;
use ji_toolkit::{objects, parse};

#[derive(Debug, StructOpt)]
#[structopt(name = "jitool", about = "Just intonation utilities")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// List the available objects.
    #[structopt(short, long)]
    list: bool,

    /// The object to run, e.g. `rt2mc` or `diamond`.
    #[structopt(required_unless = "list")]
    object: Option<String>,

    /// Arguments of the object, e.g. `3/2`, `[1/1 5/4 3/2]`, `6900` or `nil`.
    #[structopt(allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Prints reports like a patching host would show them in its console.
struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;

    if opt.list {
        for object in objects::OBJECTS {
            let outlet = if object.has_output { "" } else { " (no output)" };
            println!("{:<50} {}{}", object.usage, object.help, outlet);
        }
        return Ok(());
    }

    let name = opt.object.unwrap_or_default();
    let result = opt
        .args
        .iter()
        .map(|arg| parse::parse_value(arg))
        .collect::<ji_toolkit::Result<Vec<_>>>()
        .and_then(|args| objects::invoke(&name, &args, &mut ConsoleReporter));

    match result {
        Ok(Some(value)) => {
            println!("{}", value);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(err) => {
            log::error!("{}: {}", name, err);
            Err(io::Error::new(io::ErrorKind::InvalidInput, err))
        }
    }
}
