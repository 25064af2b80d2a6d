// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Frequency ratios as they are written in just intonation, e.g. `3/2` for a fifth.

use std::cmp::Ordering;
use std::fmt;

/// Underlying integral type for the ratios.
type Int = u64;

/// A ratio of two positive integers.
///
/// Unlike a rational number, a ratio is *not* normalized: `3/3` and `1/1` denote the same
/// interval but are different ratios. Diamond cells and octave reductions are reported in
/// exactly the form they were built in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Ratio {
    num: Int,
    denom: Int,
}

impl Ratio {
    // ==================== Constructors ====================

    /// Create a new ratio.
    ///
    /// # Panic
    ///
    /// Panics if the numerator or the denominator is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ji_toolkit::rational::*;
    ///
    /// assert_eq!(Ratio::new(3, 2).to_string(), "3/2");
    /// assert_eq!(Ratio::new(6, 4).to_string(), "6/4");
    /// ```
    pub fn new(num: Int, denom: Int) -> Ratio {
        Ratio::try_new(num, denom).expect("Ratio parts must be positive")
    }

    /// Create a new ratio, returning `None` if either part is zero.
    pub fn try_new(num: Int, denom: Int) -> Option<Ratio> {
        if num == 0 || denom == 0 {
            None
        } else {
            Some(Ratio { num, denom })
        }
    }

    pub fn unison() -> Ratio {
        Ratio { num: 1, denom: 1 }
    }

    // ==================== Transformations ====================

    pub fn recip(self) -> Ratio {
        Ratio {
            num: self.denom,
            denom: self.num,
        }
    }

    /// Divide out the common factors of numerator and denominator.
    ///
    /// ```
    /// use ji_toolkit::rational::*;
    ///
    /// assert_eq!(Ratio::new(6, 4).reduced(), Ratio::new(3, 2));
    /// assert_eq!(Ratio::new(5, 5).reduced(), Ratio::unison());
    /// ```
    pub fn reduced(self) -> Ratio {
        let div = gcd(self.num, self.denom);
        Ratio {
            num: self.num / div,
            denom: self.denom / div,
        }
    }

    /// Raise the ratio by one octave. Returns `None` on overflow.
    pub fn octave_up(self) -> Option<Ratio> {
        Some(Ratio {
            num: self.num.checked_mul(2)?,
            denom: self.denom,
        })
    }

    /// Lower the ratio by one octave. Returns `None` on overflow.
    pub fn octave_down(self) -> Option<Ratio> {
        Some(Ratio {
            num: self.num,
            denom: self.denom.checked_mul(2)?,
        })
    }

    // ==================== Destructors ====================

    pub fn numerator(self) -> Int {
        self.num
    }

    pub fn denominator(self) -> Int {
        self.denom
    }

    /// The ratio as a floating point factor.
    pub fn value(self) -> f64 {
        self.num as f64 / self.denom as f64
    }

    /// Compare the intervals denoted by two ratios, ignoring their written form.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use ji_toolkit::rational::*;
    ///
    /// assert_eq!(Ratio::new(3, 3).cmp_value(Ratio::unison()), Ordering::Equal);
    /// assert_eq!(Ratio::new(4, 3).cmp_value(Ratio::new(3, 2)), Ordering::Less);
    /// ```
    pub fn cmp_value(self, other: Ratio) -> Ordering {
        // a / b < c / d  <=>  a * d < c * b
        let l = self.num as u128 * other.denom as u128;
        let r = other.num as u128 * self.denom as u128;
        l.cmp(&r)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

/// An error which can be returned when parsing a ratio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRatioError(RatioErrorKind);

impl ParseRatioError {
    pub fn kind(&self) -> RatioErrorKind {
        self.0
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RatioErrorKind {
    /// The numerator or denominator could not be parsed as a positive integer.
    InvalidInt,
    /// The numerator or denominator was zero.
    Zero,
    /// The ratio was not of the form `<int>/<int>`.
    Malformed,
}

impl fmt::Display for RatioErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioErrorKind::InvalidInt => write!(f, "parts must be positive integers"),
            RatioErrorKind::Zero => write!(f, "parts must not be zero"),
            RatioErrorKind::Malformed => write!(f, "expected the form <num>/<den>"),
        }
    }
}

impl fmt::Display for ParseRatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ParseRatioError {}

/// ```
/// use ji_toolkit::rational::*;
///
/// assert_eq!("7/4".parse(), Ok(Ratio::new(7, 4)));
/// assert_eq!(" 5 / 3 ".parse(), Ok(Ratio::new(5, 3)));
/// assert_eq!("3".parse::<Ratio>().unwrap_err().kind(), RatioErrorKind::Malformed);
/// assert_eq!("0/2".parse::<Ratio>().unwrap_err().kind(), RatioErrorKind::Zero);
/// assert_eq!("-3/2".parse::<Ratio>().unwrap_err().kind(), RatioErrorKind::InvalidInt);
/// ```
impl std::str::FromStr for Ratio {
    type Err = ParseRatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let numerator_str = parts.next().unwrap_or_default();
        let denominator_str = parts
            .next()
            .ok_or(ParseRatioError(RatioErrorKind::Malformed))?;
        if parts.next().is_some() {
            return Err(ParseRatioError(RatioErrorKind::Malformed));
        }

        let numerator: Int = numerator_str
            .trim()
            .parse()
            .map_err(|_| ParseRatioError(RatioErrorKind::InvalidInt))?;
        let denominator: Int = denominator_str
            .trim()
            .parse()
            .map_err(|_| ParseRatioError(RatioErrorKind::InvalidInt))?;

        Ratio::try_new(numerator, denominator).ok_or(ParseRatioError(RatioErrorKind::Zero))
    }
}

/// Computes the greatest common divisor of two numbers using euclids algorithm.
///
/// # Example
///
/// ```
/// use ji_toolkit::rational::*;
///
/// assert_eq!(gcd(20, 15), 5);
/// assert_eq!(gcd(20, 19), 1);
/// assert_eq!(gcd(10, 0), 10);
/// assert_eq!(gcd(0, 0), 0);
/// ```
pub fn gcd(mut a: Int, mut b: Int) -> Int {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn octave_steps_keep_written_form() {
        let fifth = Ratio::new(3, 2);
        assert_eq!(fifth.octave_up(), Some(Ratio::new(6, 2)));
        assert_eq!(fifth.octave_down(), Some(Ratio::new(3, 4)));
        assert_eq!(Ratio::new(Int::MAX, 1).octave_up(), None);
        assert_eq!(Ratio::new(1, Int::MAX).octave_down(), None);
    }

    #[test]
    fn recip_and_value() {
        let third = Ratio::new(5, 4);
        assert_eq!(third.recip(), Ratio::new(4, 5));
        assert_eq!(third.value(), 1.25);
        assert_eq!(third.recip().value(), 0.8);
    }

    #[test]
    fn parse_errors() {
        let kind = |s: &str| s.parse::<Ratio>().map_err(|e| e.kind());
        assert_eq!(kind("1/2/3"), Err(RatioErrorKind::Malformed));
        assert_eq!(kind("abc"), Err(RatioErrorKind::Malformed));
        assert_eq!(kind("a/2"), Err(RatioErrorKind::InvalidInt));
        assert_eq!(kind("3/"), Err(RatioErrorKind::InvalidInt));
        assert_eq!(kind("3/0"), Err(RatioErrorKind::Zero));
        assert_eq!(kind("3/2"), Ok(Ratio::new(3, 2)));
    }

    #[test]
    fn try_new_rejects_zero() {
        assert_eq!(Ratio::try_new(0, 1), None);
        assert_eq!(Ratio::try_new(1, 0), None);
        assert_eq!(Ratio::try_new(1, 1), Some(Ratio::unison()));
    }
}
