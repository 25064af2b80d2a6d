// ji-toolkit -- just intonation utilities for patching environments
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Harry Partch's tonality diamond.
//!
//! Given a sequence of identities, row `i` of the otonal matrix holds every identity over
//! identity `i`, and row `i` of the utonal matrix holds identity `i` over every identity.

use crate::error::{Error, Result};
use crate::rational::Ratio;
use crate::value::Value;

/// The otonal and utonal matrices of a diamond, indexed by its identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diamond {
    identities: Vec<u64>,
    otonal: Vec<Vec<Ratio>>,
    utonal: Vec<Vec<Ratio>>,
}

impl Diamond {
    /// The diamond of all odd identities up to and including `limit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ji_toolkit::diamond::Diamond;
    ///
    /// let diamond = Diamond::new(5).unwrap();
    /// assert_eq!(diamond.identities(), &[1, 3, 5]);
    /// assert_eq!(diamond.otonal()[0][2].to_string(), "5/1");
    /// assert_eq!(diamond.utonal()[0][2].to_string(), "1/5");
    /// ```
    pub fn new(limit: i64) -> Result<Diamond> {
        if limit < 1 {
            return Err(Error::InvalidLimit { limit });
        }
        let identities: Vec<u64> = (1..=limit as u64).step_by(2).collect();
        Ok(Self::build(identities))
    }

    /// The diamond of arbitrary positive identities, rows and columns in the given order.
    ///
    /// ```
    /// use ji_toolkit::diamond::Diamond;
    ///
    /// let diamond = Diamond::from_identities(&[7, 1]).unwrap();
    /// assert_eq!(diamond.otonal()[0][1].to_string(), "1/7");
    /// assert!(Diamond::from_identities(&[]).is_err());
    /// assert!(Diamond::from_identities(&[3, 0]).is_err());
    /// ```
    pub fn from_identities(identities: &[i64]) -> Result<Diamond> {
        if identities.is_empty() {
            return Err(Error::NoIdentities);
        }
        let identities = identities
            .iter()
            .map(|&identity| {
                if identity > 0 {
                    Ok(identity as u64)
                } else {
                    Err(Error::InvalidIdentity { identity })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(identities))
    }

    fn build(identities: Vec<u64>) -> Diamond {
        let row = |i: u64, cell: fn(u64, u64) -> Ratio| -> Vec<Ratio> {
            identities.iter().map(|&j| cell(i, j)).collect()
        };
        let otonal = identities
            .iter()
            .map(|&i| row(i, |i, j| Ratio::new(j, i)))
            .collect();
        let utonal = identities
            .iter()
            .map(|&i| row(i, |i, j| Ratio::new(i, j)))
            .collect();
        log::trace!("built diamond over identities {:?}", identities);
        Diamond {
            identities,
            otonal,
            utonal,
        }
    }

    pub fn identities(&self) -> &[u64] {
        &self.identities
    }

    pub fn otonal(&self) -> &[Vec<Ratio>] {
        &self.otonal
    }

    pub fn utonal(&self) -> &[Vec<Ratio>] {
        &self.utonal
    }

    /// Number of rows (and columns) of both matrices.
    pub fn size(&self) -> usize {
        self.identities.len()
    }

    /// The pair `[otonal utonal]` as nested lists of ratio strings.
    pub fn into_value(self) -> Value {
        let matrix = |rows: Vec<Vec<Ratio>>| -> Value {
            rows.into_iter()
                .map(|row| row.into_iter().map(|r| r.to_string()).collect::<Vec<_>>())
                .collect::<Vec<_>>()
                .into()
        };
        Value::List(vec![matrix(self.otonal), matrix(self.utonal)])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(rows: &[Vec<Ratio>]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(Ratio::to_string).collect())
            .collect()
    }

    #[test]
    fn five_limit() {
        let diamond = Diamond::new(5).unwrap();
        assert_eq!(diamond.size(), 3);
        assert_eq!(
            strings(diamond.otonal()),
            vec![
                vec!["1/1", "3/1", "5/1"],
                vec!["1/3", "3/3", "5/3"],
                vec!["1/5", "3/5", "5/5"],
            ]
        );
        assert_eq!(
            strings(diamond.utonal()),
            vec![
                vec!["1/1", "1/3", "1/5"],
                vec!["3/1", "3/3", "3/5"],
                vec!["5/1", "5/3", "5/5"],
            ]
        );
    }

    #[test]
    fn even_limit_stops_at_last_odd() {
        assert_eq!(Diamond::new(8).unwrap().identities(), &[1, 3, 5, 7]);
        assert_eq!(Diamond::new(1).unwrap().size(), 1);
        assert_eq!(Diamond::new(0), Err(Error::InvalidLimit { limit: 0 }));
    }

    #[test]
    fn otonal_is_inverted_transpose_of_utonal() {
        let diamond = Diamond::from_identities(&[4, 9, 1, 9]).unwrap();
        let n = diamond.size();
        for i in 0..n {
            assert_eq!(diamond.otonal()[i].len(), n);
            assert_eq!(diamond.utonal()[i].len(), n);
            for j in 0..n {
                assert_eq!(diamond.otonal()[i][j], diamond.utonal()[j][i]);
                assert_eq!(diamond.otonal()[i][j], diamond.utonal()[i][j].recip());
            }
        }
    }

    #[test]
    fn caller_order_is_kept() {
        let diamond = Diamond::from_identities(&[5, 3, 1]).unwrap();
        assert_eq!(diamond.identities(), &[5, 3, 1]);
        assert_eq!(
            strings(diamond.otonal())[0],
            vec!["5/5", "3/5", "1/5"]
        );
    }

    #[test]
    fn rejects_non_positive_identities() {
        assert_eq!(
            Diamond::from_identities(&[1, -3]),
            Err(Error::InvalidIdentity { identity: -3 })
        );
        assert_eq!(Diamond::from_identities(&[]), Err(Error::NoIdentities));
    }

    #[test]
    fn value_form() {
        let value = Diamond::new(3).unwrap().into_value();
        assert_eq!(
            value.to_string(),
            "[[[1/1 3/1]\n  [1/3 3/3]]\n [[1/1 1/3]\n  [3/1 3/3]]]"
        );
    }
}
