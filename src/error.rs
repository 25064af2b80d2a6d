// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Errors of all toolkit operations.

use snafu::Snafu;

use crate::parse::SyntaxErrorKind;
use crate::rational::{Ratio, RatioErrorKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every failure is scoped to the single call that produced it.
#[derive(Debug, Clone, PartialEq, Snafu)]
pub enum Error {
    // Wrong kind of input
    #[snafu(display("{} just accepts {}, got {}", operation, accepted, found))]
    Type {
        operation: &'static str,
        accepted: &'static str,
        found: &'static str,
    },

    // Malformed input
    #[snafu(display("could not parse ratio {:?}: {}", input, kind))]
    Parse { input: String, kind: RatioErrorKind },
    #[snafu(display("syntax error at offset {}: {}", offset, kind))]
    Syntax { offset: usize, kind: SyntaxErrorKind },

    // Values outside of the domain of an operation
    #[snafu(display("frequency must be positive, got {}", freq))]
    NonPositiveFrequency { freq: f64 },
    #[snafu(display("{} must be a finite number, got {}", what, value))]
    NotFinite { what: &'static str, value: f64 },
    #[snafu(display(
        "window must span at least one octave (1200 cents), got {} to {}",
        down,
        up
    ))]
    NarrowWindow { down: f64, up: f64 },
    #[snafu(display("octave span must be at least 2, got {}", octave))]
    InvalidOctave { octave: f64 },
    #[snafu(display("diamond limit must be at least 1, got {}", limit))]
    InvalidLimit { limit: i64 },
    #[snafu(display("diamond needs at least one identity"))]
    NoIdentities,
    #[snafu(display("diamond identities must be positive integers, got {}", identity))]
    InvalidIdentity { identity: i64 },
    #[snafu(display("ratio {} overflows while reducing", ratio))]
    Overflow { ratio: Ratio },

    // Host adapter
    #[snafu(display("unknown object {:?}", name))]
    UnknownObject { name: String },
    #[snafu(display("usage: {}", usage))]
    Arity { usage: &'static str },
}
