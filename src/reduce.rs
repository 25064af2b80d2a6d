// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Folding ratios into an octave and pitches into a window.

use log::trace;

use crate::convert::parse_ratio;
use crate::error::{Error, Result};
use crate::pitch::OCTAVE_CENTS;
use crate::rational::Ratio;
use crate::value::Value;

/// Octave span used when none is given.
pub const DEFAULT_OCTAVE: f64 = 2.0;

/// Bring a ratio into the span `[1, octave]` by doubling its numerator or denominator.
///
/// The written form is kept, no common factors are divided out.
///
/// # Examples
///
/// ```
/// use ji_toolkit::rational::Ratio;
/// use ji_toolkit::reduce::*;
///
/// assert_eq!(reduce_ratio(Ratio::new(5, 1), DEFAULT_OCTAVE), Ok(Ratio::new(5, 4)));
/// assert_eq!(reduce_ratio(Ratio::new(1, 3), DEFAULT_OCTAVE), Ok(Ratio::new(4, 3)));
/// assert_eq!(reduce_ratio(Ratio::new(2, 1), DEFAULT_OCTAVE), Ok(Ratio::new(2, 1)));
/// ```
pub fn reduce_ratio(ratio: Ratio, octave: f64) -> Result<Ratio> {
    // With a span narrower than 2, a single doubling can jump across it and never land inside.
    if !(octave >= 2.0) || !octave.is_finite() {
        return Err(Error::InvalidOctave { octave });
    }

    let mut current = ratio;
    loop {
        let value = current.value();
        let next = if value < 1.0 {
            current.octave_up()
        } else if value > octave {
            current.octave_down()
        } else {
            trace!("reduced {} to {}", ratio, current);
            return Ok(current);
        };
        current = next.ok_or(Error::Overflow { ratio })?;
    }
}

/// Octave-reduce a ratio string or a (nested) list of ratio strings.
///
/// ```
/// use ji_toolkit::reduce::*;
/// use ji_toolkit::value::Value;
///
/// let reduced = octave_reduce(&Value::from(vec!["3/1", "1/5"]), DEFAULT_OCTAVE).unwrap();
/// assert_eq!(reduced, Value::from(vec!["3/2", "8/5"]));
/// ```
pub fn octave_reduce(ratios: &Value, octave: f64) -> Result<Value> {
    ratios.map_leaves(&mut |leaf: &Value| match leaf {
        Value::Str(s) => Ok(Value::Str(reduce_ratio(parse_ratio(s)?, octave)?.to_string())),
        other => Err(Error::Type {
            operation: "octavereduce",
            accepted: "ratio strings and lists",
            found: other.kind_name(),
        }),
    })
}

/// A range of MIDI cents that pitches can be folded into.
///
/// The window is half-open: `down` belongs to it, `up` does not. Pitches are moved by whole
/// periods, where the period is the width of the window if that is a whole number of octaves,
/// and a single octave otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    down: f64,
    up: f64,
    period: f64,
}

impl Window {
    /// Create a window spanning at least one octave.
    ///
    /// ```
    /// use ji_toolkit::reduce::Window;
    ///
    /// assert_eq!(Window::new(0.0, 2400.0).unwrap().period(), 2400.0);
    /// assert_eq!(Window::new(0.0, 1900.0).unwrap().period(), 1200.0);
    /// assert!(Window::new(6000.0, 7000.0).is_err());
    /// ```
    pub fn new(down: f64, up: f64) -> Result<Window> {
        for &(what, value) in &[("lower bound", down), ("upper bound", up)] {
            if !value.is_finite() {
                return Err(Error::NotFinite { what, value });
            }
        }
        let width = up - down;
        if width < OCTAVE_CENTS {
            return Err(Error::NarrowWindow { down, up });
        }
        let period = if width % OCTAVE_CENTS == 0.0 {
            width
        } else {
            OCTAVE_CENTS
        };
        Ok(Window { down, up, period })
    }

    pub fn down(&self) -> f64 {
        self.down
    }

    pub fn up(&self) -> f64 {
        self.up
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn contains(&self, midicent: f64) -> bool {
        self.down <= midicent && midicent < self.up
    }

    /// Move a pitch by whole periods until it lies inside the window.
    /// Pitches already inside are returned untouched.
    ///
    /// ```
    /// use ji_toolkit::reduce::Window;
    ///
    /// let window = Window::new(0.0, 1200.0).unwrap();
    /// assert_eq!(window.fold(13000.0), Ok(1000.0));
    /// assert_eq!(window.fold(-100.0), Ok(1100.0));
    /// assert_eq!(window.fold(1200.0), Ok(0.0));
    /// ```
    pub fn fold(&self, midicent: f64) -> Result<f64> {
        if !midicent.is_finite() {
            return Err(Error::NotFinite {
                what: "pitch",
                value: midicent,
            });
        }

        let folded = if midicent < self.down {
            let periods = ((self.down - midicent) / self.period).ceil();
            midicent + periods * self.period
        } else if midicent >= self.up {
            let periods = ((midicent - self.up) / self.period).floor() + 1.0;
            midicent - periods * self.period
        } else {
            return Ok(midicent);
        };

        // The closed form can end up a rounding error outside of the window.
        let folded = if folded >= self.up {
            folded - self.period
        } else {
            folded
        };
        Ok(folded.max(self.down))
    }
}

/// Fold a pitch or a (nested) list of pitches into the window `[down, up)`.
///
/// # Examples
///
/// ```
/// use ji_toolkit::reduce::*;
/// use ji_toolkit::value::Value;
///
/// assert_eq!(range_reduce(&Value::Float(13000.0), 0.0, 1200.0), Ok(Value::Float(1000.0)));
/// assert_eq!(
///     range_reduce(&Value::from(vec![5900.0, 7300.0]), 6000.0, 7200.0),
///     Ok(Value::from(vec![7100.0, 6100.0]))
/// );
/// assert!(range_reduce(&Value::Float(6000.0), 6000.0, 6600.0).is_err());
/// ```
pub fn range_reduce(midicents: &Value, down: f64, up: f64) -> Result<Value> {
    let window = Window::new(down, up)?;
    midicents.map_leaves(&mut |leaf: &Value| match leaf.as_f64() {
        Some(midicent) => window.fold(midicent).map(Value::Float),
        None => Err(Error::Type {
            operation: "rangereduce",
            accepted: "ints, floats and lists",
            found: leaf.kind_name(),
        }),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn reduce_str(s: &str, octave: f64) -> Result<String> {
        Ok(reduce_ratio(s.parse().unwrap(), octave)?.to_string())
    }

    #[test]
    fn octave_reduction() {
        assert_eq!(reduce_str("5/1", 2.0), Ok("5/4".into()));
        assert_eq!(reduce_str("1/3", 2.0), Ok("4/3".into()));
        assert_eq!(reduce_str("3/6", 2.0), Ok("6/6".into()));
        assert_eq!(reduce_str("1/1", 2.0), Ok("1/1".into()));
        assert_eq!(reduce_str("9/8", 2.0), Ok("9/8".into()));
    }

    #[test]
    fn wider_spans() {
        assert_eq!(reduce_str("5/1", 4.0), Ok("5/2".into()));
        assert_eq!(reduce_str("4/1", 4.0), Ok("4/1".into()));
        assert_eq!(reduce_str("1/5", 3.0), Ok("8/5".into()));
    }

    #[test]
    fn invalid_spans() {
        let fifth = Ratio::new(3, 2);
        assert_eq!(
            reduce_ratio(fifth, 1.5),
            Err(Error::InvalidOctave { octave: 1.5 })
        );
        assert!(reduce_ratio(fifth, f64::NAN).is_err());
        assert!(reduce_ratio(fifth, f64::INFINITY).is_err());
    }

    #[test]
    fn overflow_is_reported() {
        let huge = Ratio::new(1, u64::MAX);
        assert_eq!(
            reduce_ratio(huge, 2.0),
            Err(Error::Overflow { ratio: huge })
        );
    }

    #[test]
    fn octave_reduce_rejects_numbers() {
        assert_eq!(
            octave_reduce(&Value::Float(1.5), 2.0),
            Err(Error::Type {
                operation: "octavereduce",
                accepted: "ratio strings and lists",
                found: "float",
            })
        );
    }

    #[test]
    fn nested_octave_reduce() {
        let input = Value::from(vec![Value::from("7/1"), Value::from(vec!["1/7"])]);
        assert_eq!(
            octave_reduce(&input, 2.0),
            Ok(Value::from(vec![
                Value::from("7/4"),
                Value::from(vec!["8/7"]),
            ]))
        );
    }

    #[test]
    fn window_bounds() {
        let window = Window::new(6000.0, 7200.0).unwrap();
        assert_eq!(window.fold(6000.0), Ok(6000.0));
        assert_eq!(window.fold(7200.0), Ok(6000.0));
        assert_eq!(window.fold(4800.0), Ok(6000.0));
        assert_eq!(window.fold(6500.0), Ok(6500.0));
        assert!(window.fold(f64::INFINITY).is_err());
        assert!(window.fold(f64::NAN).is_err());
    }

    #[test]
    fn window_period() {
        // width of two octaves, so pitches move by two octaves
        let wide = Window::new(0.0, 2400.0).unwrap();
        assert_eq!(wide.fold(2500.0), Ok(100.0));
        assert_eq!(wide.fold(-100.0), Ok(2300.0));

        // width is no multiple of an octave, so pitches move by single octaves
        let odd = Window::new(0.0, 1300.0).unwrap();
        assert_eq!(odd.fold(1250.0), Ok(1250.0));
        assert_eq!(odd.fold(1300.0), Ok(100.0));
        assert_eq!(odd.fold(-1250.0), Ok(1150.0));
    }

    #[test]
    fn huge_pitches_terminate() {
        let window = Window::new(0.0, 1200.0).unwrap();
        let folded = window.fold(1.0e15).unwrap();
        assert!(window.contains(folded), "{} outside window", folded);
        let folded = window.fold(-1.0e15).unwrap();
        assert!(window.contains(folded), "{} outside window", folded);
    }

    #[test]
    fn folded_pitches_lie_in_window() {
        let window = Window::new(-350.5, 2049.5).unwrap();
        let mut midicent = -20000.0;
        while midicent < 20000.0 {
            let folded = window.fold(midicent).unwrap();
            assert!(window.contains(folded), "{} -> {}", midicent, folded);
            midicent += 123.25;
        }
    }

    #[test]
    fn narrow_windows() {
        assert_eq!(
            Window::new(0.0, 1199.0),
            Err(Error::NarrowWindow { down: 0.0, up: 1199.0 })
        );
        assert!(Window::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn range_reduce_kinds() {
        assert_eq!(
            range_reduce(&Value::Int(8500), 6000.0, 7200.0),
            Ok(Value::Float(6100.0))
        );
        assert!(range_reduce(&Value::from("3/2"), 6000.0, 7200.0).is_err());
    }
}
