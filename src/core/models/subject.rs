//! Subject model

use super::SubjectId;
use serde::{Deserialize, Serialize};

/// Credit weight given to a freshly added subject
pub const DEFAULT_CREDITS: u32 = 3;

/// Grade given to a freshly added subject
pub const DEFAULT_GRADE: &str = "A";

/// A single graded subject within a semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    id: SubjectId,

    /// Display name (free text, may be empty)
    pub name: String,

    /// Credit weight
    pub credits: u32,

    /// Letter grade, looked up in the active scale at computation time.
    /// May hold a value the scale does not know.
    pub grade: String,
}

impl Subject {
    /// Create a subject with a fresh id
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `credits` - Credit weight
    /// * `grade` - Letter grade (e.g., "A-", "B+")
    #[must_use]
    pub fn new(name: impl Into<String>, credits: u32, grade: impl Into<String>) -> Self {
        Self {
            id: SubjectId::new(),
            name: name.into(),
            credits,
            grade: grade.into(),
        }
    }

    /// Unique identity, fixed at creation
    #[must_use]
    pub const fn id(&self) -> SubjectId {
        self.id
    }

    /// Apply a single field edit
    pub fn apply(&mut self, edit: SubjectEdit) {
        match edit {
            SubjectEdit::Name(name) => self.name = name,
            SubjectEdit::Credits(credits) => self.credits = credits,
            SubjectEdit::Grade(grade) => self.grade = grade,
        }
    }
}

impl Default for Subject {
    /// Empty name, 3 credits, grade "A"
    fn default() -> Self {
        Self::new(String::new(), DEFAULT_CREDITS, DEFAULT_GRADE)
    }
}

/// A change to one field of a subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectEdit {
    /// Replace the display name
    Name(String),
    /// Replace the credit weight
    Credits(u32),
    /// Replace the letter grade
    Grade(String),
}

/// Normalise free-text credit input to a credit weight.
///
/// Takes the leading run of digits (after an optional `+`). Anything else,
/// including negative numbers, empty input and overflow, becomes `0`.
#[must_use]
pub fn parse_credits(input: &str) -> u32 {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end].parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_defaults() {
        let subject = Subject::default();
        assert!(subject.name.is_empty());
        assert_eq!(subject.credits, 3);
        assert_eq!(subject.grade, "A");
    }

    #[test]
    fn test_subject_creation() {
        let subject = Subject::new("Linear Algebra", 4, "B+");
        assert_eq!(subject.name, "Linear Algebra");
        assert_eq!(subject.credits, 4);
        assert_eq!(subject.grade, "B+");
    }

    #[test]
    fn test_apply_edits() {
        let mut subject = Subject::default();
        let id = subject.id();

        subject.apply(SubjectEdit::Name("Chemistry".to_string()));
        subject.apply(SubjectEdit::Credits(5));
        subject.apply(SubjectEdit::Grade("C-".to_string()));

        assert_eq!(subject.id(), id);
        assert_eq!(subject.name, "Chemistry");
        assert_eq!(subject.credits, 5);
        assert_eq!(subject.grade, "C-");
    }

    #[test]
    fn test_parse_credits() {
        assert_eq!(parse_credits("4"), 4);
        assert_eq!(parse_credits(" 3.5"), 3);
        assert_eq!(parse_credits("12abc"), 12);
        assert_eq!(parse_credits("+2"), 2);
        assert_eq!(parse_credits("abc"), 0);
        assert_eq!(parse_credits("-2"), 0);
        assert_eq!(parse_credits(""), 0);
        assert_eq!(parse_credits("99999999999999999999"), 0);
    }
}
