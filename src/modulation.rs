// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Searching for notes that connect two JI structures.

/// Receives the messages of operations that report instead of returning values.
pub trait Reporter {
    /// An informational message.
    fn info(&mut self, message: &str);
    /// A message signalling that the operation did not find what it was looking for.
    fn error(&mut self, message: &str);
}

/// Forwards all reports to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&mut self, message: &str) {
        log::info!("{}", message);
    }

    fn error(&mut self, message: &str) {
        log::error!("{}", message);
    }
}

/// A report collected by the `Reporter` impl of `Vec<Report>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Info(String),
    Error(String),
}

impl Reporter for Vec<Report> {
    fn info(&mut self, message: &str) {
        self.push(Report::Info(message.to_owned()));
    }

    fn error(&mut self, message: &str) {
        self.push(Report::Error(message.to_owned()));
    }
}

/// A pair of notes that are close enough to modulate from one structure to the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Modulation {
    pub from: f64,
    pub to: f64,
    /// Absolute distance in cents
    pub distance: f64,
}

/// Find all pairs of notes in `from` and `to` that are less than `threshold` cents apart.
///
/// Every pair is reported as info, in the order of `from` first, then `to`. If there is no
/// such pair, a single error is reported instead.
///
/// # Examples
///
/// ```
/// use ji_toolkit::modulation::*;
///
/// let mut reports: Vec<Report> = Vec::new();
/// let found = find_modulations(&[6900.0], &[6920.0], 30.0, &mut reports);
/// assert_eq!(found.len(), 1);
/// assert_eq!(
///     reports,
///     vec![Report::Info("The note 6900 can be modulated to 6920 with a distance of 20 cents".into())]
/// );
/// ```
pub fn find_modulations(
    from: &[f64],
    to: &[f64],
    threshold: f64,
    reporter: &mut dyn Reporter,
) -> Vec<Modulation> {
    let mut found = Vec::new();
    for &a in from {
        for &b in to {
            let distance = (a - b).abs();
            if distance < threshold {
                reporter.info(&format!(
                    "The note {} can be modulated to {} with a distance of {} cents",
                    a as i64, b as i64, distance as i64
                ));
                found.push(Modulation {
                    from: a,
                    to: b,
                    distance,
                });
            }
        }
    }
    if found.is_empty() {
        reporter.error(&format!(
            "No note can be modulated with a distance of {} cents",
            threshold as i64
        ));
    }
    found
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn no_match() {
        let mut reports: Vec<Report> = Vec::new();
        let found = find_modulations(&[6900.0], &[7100.0], 30.0, &mut reports);
        assert!(found.is_empty());
        assert_eq!(
            reports,
            vec![Report::Error(
                "No note can be modulated with a distance of 30 cents".into()
            )]
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        let mut reports: Vec<Report> = Vec::new();
        let found = find_modulations(&[6900.0], &[6930.0], 30.0, &mut reports);
        assert!(found.is_empty());
        assert_eq!(reports.len(), 1);
    }

    #[test]
    fn all_pairs_in_order() {
        let mut reports: Vec<Report> = Vec::new();
        let found = find_modulations(
            &[6000.0, 6386.3, 6702.0],
            &[6003.9, 6702.0, 6400.5],
            20.0,
            &mut reports,
        );
        let pairs: Vec<_> = found.iter().map(|m| (m.from, m.to)).collect();
        assert_eq!(
            pairs,
            vec![(6000.0, 6003.9), (6386.3, 6400.5), (6702.0, 6702.0)]
        );
        assert_eq!(
            reports,
            vec![
                Report::Info(
                    "The note 6000 can be modulated to 6003 with a distance of 3 cents".into()
                ),
                Report::Info(
                    "The note 6386 can be modulated to 6400 with a distance of 14 cents".into()
                ),
                Report::Info(
                    "The note 6702 can be modulated to 6702 with a distance of 0 cents".into()
                ),
            ]
        );
    }

    #[test]
    fn empty_collections() {
        let mut reports: Vec<Report> = Vec::new();
        assert!(find_modulations(&[], &[6000.0], 10.0, &mut reports).is_empty());
        assert!(matches!(reports.as_slice(), [Report::Error(_)]));
    }
}
