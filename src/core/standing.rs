//! Standing bands for GPA values

use crate::core::scale::GradeScale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Band a GPA falls into, used for colouring and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Standing {
    /// Below the fair threshold
    Poor,
    /// At least 2.5 / 5.5
    Fair,
    /// At least 3.0 / 7.0
    Good,
    /// At least 3.5 / 8.5
    Excellent,
}

impl Standing {
    /// Classify `gpa` against the thresholds of `scale`
    #[must_use]
    pub fn classify(gpa: f64, scale: GradeScale) -> Self {
        let (excellent, good, fair) = match scale {
            GradeScale::FourPoint => (3.5, 3.0, 2.5),
            GradeScale::TenPoint => (8.5, 7.0, 5.5),
        };
        if gpa >= excellent {
            Self::Excellent
        } else if gpa >= good {
            Self::Good
        } else if gpa >= fair {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Lowercase name, also used as a CSS class suffix
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
