//! Grade scale tables
//!
//! Maps a letter grade to its point value under one of the two supported
//! scales. Lookups are exact and case-sensitive; a grade that is not a key of
//! the active table is worth zero points.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Points per grade on the 4.0 scale, best grade first.
const FOUR_POINT_TABLE: &[(&str, f64)] = &[
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("F", 0.0),
];

/// Points per grade on the 10.0 scale. There is no `D+`.
const TEN_POINT_TABLE: &[(&str, f64)] = &[
    ("A+", 10.0),
    ("A", 9.0),
    ("A-", 8.0),
    ("B+", 7.0),
    ("B", 6.0),
    ("B-", 5.0),
    ("C+", 4.0),
    ("C", 3.0),
    ("C-", 2.0),
    ("D", 1.0),
    ("F", 0.0),
];

/// One of the two built-in grading scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GradeScale {
    /// The "4.0" scale
    #[default]
    #[serde(rename = "4.0")]
    FourPoint,
    /// The "10.0" scale
    #[serde(rename = "10.0")]
    TenPoint,
}

impl GradeScale {
    /// Every supported scale, in display order
    pub const ALL: [Self; 2] = [Self::FourPoint, Self::TenPoint];

    /// The grade table for this scale, best grade first
    #[must_use]
    pub const fn grades(self) -> &'static [(&'static str, f64)] {
        match self {
            Self::FourPoint => FOUR_POINT_TABLE,
            Self::TenPoint => TEN_POINT_TABLE,
        }
    }

    /// Point value of `grade`, or `None` when the grade is not in this table
    #[must_use]
    pub fn lookup(self, grade: &str) -> Option<f64> {
        self.grades()
            .iter()
            .find(|(key, _)| *key == grade)
            .map(|&(_, points)| points)
    }

    /// Point value of `grade`; unrecognised grades are worth `0.0`
    #[must_use]
    pub fn points_for(self, grade: &str) -> f64 {
        self.lookup(grade).unwrap_or(0.0)
    }

    /// Whether `grade` is a key of this table
    #[must_use]
    pub fn is_known(self, grade: &str) -> bool {
        self.lookup(grade).is_some()
    }

    /// Highest attainable point value ("out of")
    #[must_use]
    pub const fn max_points(self) -> f64 {
        match self {
            Self::FourPoint => 4.0,
            Self::TenPoint => 10.0,
        }
    }

    /// Canonical identifier ("4.0" or "10.0")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FourPoint => "4.0",
            Self::TenPoint => "10.0",
        }
    }
}

impl FromStr for GradeScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4.0" | "4" => Ok(Self::FourPoint),
            "10.0" | "10" => Ok(Self::TenPoint),
            other => Err(format!("Unknown grade scale: '{other}' (expected 4.0 or 10.0)")),
        }
    }
}

impl fmt::Display for GradeScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
