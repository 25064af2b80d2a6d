// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Conversion of ratios to absolute pitches in MIDI cents.

use crate::error::{Error, Result};
use crate::pitch::{freq_to_midicent, midicent_to_freq};
use crate::rational::Ratio;
use crate::value::Value;

/// Fundamental used when none is given, in MIDI cents (middle C).
pub const DEFAULT_FUNDAMENTAL: f64 = 6000.0;

const ACCEPTED: &str = "ratio strings, ints, floats and lists";

/// The pitch reached by stepping a ratio up from `fundamental`, both in MIDI cents.
///
/// ```
/// use ji_toolkit::convert::*;
/// use ji_toolkit::rational::Ratio;
///
/// assert_eq!(ratio_to_midicent(Ratio::new(2, 1), 6900.0), Ok(8100.0));
/// assert!((ratio_to_midicent(Ratio::new(2, 1), 6000.0).unwrap() - 7200.0).abs() < 1e-9);
/// ```
pub fn ratio_to_midicent(ratio: Ratio, fundamental: f64) -> Result<f64> {
    multiplier_to_midicent(ratio.value(), fundamental)
}

fn multiplier_to_midicent(factor: f64, fundamental: f64) -> Result<f64> {
    freq_to_midicent(factor * midicent_to_freq(fundamental))
}

/// Parse a ratio string, turning failures into crate errors.
pub fn parse_ratio(input: &str) -> Result<Ratio> {
    input.parse().map_err(|err: crate::rational::ParseRatioError| Error::Parse {
        input: input.to_owned(),
        kind: err.kind(),
    })
}

/// Convert ratios to MIDI cents relative to `fundamental` (in MIDI cents, not Hz).
///
/// Accepts ratio strings like `"3/2"`, plain numbers used as multipliers, and (nested) lists of
/// those. The result has the same shape as the input, with floats in place of every ratio.
///
/// # Examples
///
/// ```
/// use ji_toolkit::convert::*;
/// use ji_toolkit::value::Value;
///
/// assert_eq!(ratios_to_midicents(&Value::from("2/1"), 6900.0), Ok(Value::Float(8100.0)));
/// assert_eq!(ratios_to_midicents(&Value::Int(4), 6900.0), Ok(Value::Float(9300.0)));
/// assert!(ratios_to_midicents(&Value::Bool(true), DEFAULT_FUNDAMENTAL).is_err());
/// ```
pub fn ratios_to_midicents(ratios: &Value, fundamental: f64) -> Result<Value> {
    ratios.map_leaves(&mut |leaf: &Value| {
        let midicent = match leaf {
            Value::Str(s) => ratio_to_midicent(parse_ratio(s)?, fundamental)?,
            Value::Int(x) => multiplier_to_midicent(*x as f64, fundamental)?,
            Value::Float(x) => multiplier_to_midicent(*x, fundamental)?,
            other => {
                return Err(Error::Type {
                    operation: "rt2mc",
                    accepted: ACCEPTED,
                    found: other.kind_name(),
                })
            }
        };
        Ok(Value::Float(midicent))
    })
}
