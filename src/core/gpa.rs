//! GPA aggregation
//!
//! Credit-weighted averages at semester and cumulative granularity. Every
//! function here is pure: it reads the subjects it is given and returns a
//! number, and degenerate input (no subjects, zero credits, unknown grades)
//! resolves to a defined value instead of an error.

use crate::core::models::{Semester, Subject};
use crate::core::scale::GradeScale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a subject whose grade is missing from the active table is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownGradePolicy {
    /// Zero points, credits still in the denominator
    #[default]
    #[serde(rename = "count")]
    CountCredits,
    /// Left out of the average entirely
    #[serde(rename = "exclude")]
    ExcludeCredits,
}

impl FromStr for UnknownGradePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(Self::CountCredits),
            "exclude" => Ok(Self::ExcludeCredits),
            other => Err(format!(
                "Unknown grade policy: '{other}' (expected count or exclude)"
            )),
        }
    }
}

impl fmt::Display for UnknownGradePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountCredits => f.write_str("count"),
            Self::ExcludeCredits => f.write_str("exclude"),
        }
    }
}

/// Cumulative result over a whole record
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CumulativeGpa {
    /// Credit-weighted average across every subject of every semester
    pub cgpa: f64,
    /// Sum of every subject's credits
    pub total_credits: u64,
}

/// Quality points and GPA denominator accumulated over some subjects
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    points: f64,
    weight: u64,
}

impl Tally {
    fn average(self) -> f64 {
        if self.weight == 0 {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let weight = self.weight as f64;
            self.points / weight
        }
    }
}

/// GPA calculator bound to a scale and an unknown-grade policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GpaCalculator {
    scale: GradeScale,
    policy: UnknownGradePolicy,
}

impl GpaCalculator {
    /// Calculator for `scale` with the default policy (credits counted)
    #[must_use]
    pub const fn new(scale: GradeScale) -> Self {
        Self {
            scale,
            policy: UnknownGradePolicy::CountCredits,
        }
    }

    /// Use `policy` for grades the scale does not know
    #[must_use]
    pub const fn with_policy(mut self, policy: UnknownGradePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Scale this calculator reads grades against
    #[must_use]
    pub const fn scale(&self) -> GradeScale {
        self.scale
    }

    /// Policy for unrecognised grades
    #[must_use]
    pub const fn policy(&self) -> UnknownGradePolicy {
        self.policy
    }

    fn tally<'a>(&self, subjects: impl IntoIterator<Item = &'a Subject>) -> Tally {
        subjects
            .into_iter()
            .fold(Tally::default(), |mut acc, subject| {
                let points = match (self.scale.lookup(&subject.grade), self.policy) {
                    (Some(points), _) => points,
                    (None, UnknownGradePolicy::CountCredits) => 0.0,
                    (None, UnknownGradePolicy::ExcludeCredits) => return acc,
                };
                acc.points += points * f64::from(subject.credits);
                acc.weight += u64::from(subject.credits);
                acc
            })
    }

    /// Credit-weighted GPA of one semester's subjects.
    ///
    /// Returns `0.0` when there are no subjects or no counted credits.
    #[must_use]
    pub fn semester_gpa(&self, subjects: &[Subject]) -> f64 {
        self.tally(subjects).average()
    }

    /// CGPA across every subject of every semester, plus the total credit count.
    ///
    /// Semesters are flattened: this is a single weighted average over all
    /// subjects, not an average of semester GPAs.
    #[must_use]
    pub fn cumulative_gpa(&self, semesters: &[Semester]) -> CumulativeGpa {
        let all_subjects = || semesters.iter().flat_map(Semester::subjects);
        let total_credits: u64 = all_subjects().map(|s| u64::from(s.credits)).sum();
        CumulativeGpa {
            cgpa: self.tally(all_subjects()).average(),
            total_credits,
        }
    }
}

/// Semester GPA under `scale`, counting the credits of unknown grades.
#[must_use]
pub fn semester_gpa(subjects: &[Subject], scale: GradeScale) -> f64 {
    GpaCalculator::new(scale).semester_gpa(subjects)
}

/// Cumulative GPA under `scale`, counting the credits of unknown grades.
#[must_use]
pub fn cumulative_gpa(semesters: &[Semester], scale: GradeScale) -> CumulativeGpa {
    GpaCalculator::new(scale).cumulative_gpa(semesters)
}
