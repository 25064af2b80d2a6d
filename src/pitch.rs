// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Conversion between MIDI cents and frequencies.
//!
//! A MIDI cent is a hundredth of a MIDI note index, so one octave spans 1200 MIDI cents.

use crate::error::{Error, Result};
use crate::rational::Ratio;

/// MIDI cent value of the reference pitch A4.
pub const A4_MIDICENT: f64 = 6900.0;

/// Frequency of the reference pitch A4 in Hz.
pub const A4_FREQUENCY: f64 = 440.0;

/// Width of an octave in cents.
pub const OCTAVE_CENTS: f64 = 1200.0;

/// Return the frequency of a pitch given in MIDI cents.
///
/// # Examples
///
/// ```
/// use ji_toolkit::pitch::*;
///
/// assert_eq!(midicent_to_freq(6900.0), 440.0);
/// assert_eq!(midicent_to_freq(5700.0), 220.0);
/// assert_eq!(midicent_to_freq(8100.0), 880.0);
/// ```
pub fn midicent_to_freq(midicent: f64) -> f64 {
    A4_FREQUENCY * 2.0f64.powf((midicent - A4_MIDICENT) / OCTAVE_CENTS)
}

/// Return the MIDI cent value of a frequency.
///
/// # Examples
///
/// ```
/// use ji_toolkit::pitch::*;
///
/// assert_eq!(freq_to_midicent(440.0), Ok(6900.0));
/// assert_eq!(freq_to_midicent(110.0), Ok(4500.0));
/// assert!(freq_to_midicent(0.0).is_err());
/// ```
pub fn freq_to_midicent(freq: f64) -> Result<f64> {
    // also rejects NaN
    if !(freq > 0.0) {
        return Err(Error::NonPositiveFrequency { freq });
    }
    Ok(OCTAVE_CENTS * (freq / A4_FREQUENCY).log2() + A4_MIDICENT)
}

/// Size of the interval denoted by a ratio, in cents.
///
/// ```
/// use ji_toolkit::pitch::*;
/// use ji_toolkit::rational::Ratio;
///
/// assert_eq!(ratio_to_cents(Ratio::new(2, 1)), 1200.0);
/// assert_eq!(ratio_to_cents(Ratio::new(1, 4)), -2400.0);
/// ```
pub fn ratio_to_cents(ratio: Ratio) -> f64 {
    OCTAVE_CENTS * ratio.value().log2()
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "{} is not close to {}",
            actual,
            expected
        );
    }

    #[test]
    fn round_trip() {
        for &mc in &[-2400.0, 0.0, 1.5, 4800.0, 6000.0, 6901.955, 12700.0, 20000.0] {
            assert_close(freq_to_midicent(midicent_to_freq(mc)).unwrap(), mc);
        }
    }

    #[test]
    fn rejects_non_positive() {
        assert_eq!(
            freq_to_midicent(-1.0),
            Err(Error::NonPositiveFrequency { freq: -1.0 })
        );
        assert!(freq_to_midicent(f64::NAN).is_err());
    }

    #[test]
    fn fifth_in_cents() {
        assert_close(ratio_to_cents(Ratio::new(3, 2)), 701.955_000_865_387_4);
    }

    #[test]
    fn middle_c() {
        assert_close(midicent_to_freq(6000.0), 261.625_565_300_598_6);
    }
}
