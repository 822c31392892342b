//! Semester model

use super::{SemesterId, Subject, SubjectId};
use crate::core::gpa;
use crate::core::scale::GradeScale;
use serde::{Deserialize, Serialize};

/// A named group of subjects
///
/// The semester GPA is not stored; [`Semester::gpa`] derives it from the
/// subjects each time it is read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    id: SemesterId,

    /// Display name (e.g., "Semester 1", "Fall 2024")
    pub name: String,

    /// Subjects in insertion order
    subjects: Vec<Subject>,
}

impl Semester {
    /// Create an empty semester with a fresh id
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SemesterId::new(),
            name: name.into(),
            subjects: Vec::new(),
        }
    }

    /// Unique identity, fixed at creation
    #[must_use]
    pub const fn id(&self) -> SemesterId {
        self.id
    }

    /// Subjects in insertion order
    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Look up a subject by id
    #[must_use]
    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id() == id)
    }

    pub(crate) fn subject_mut(&mut self, id: SubjectId) -> Option<&mut Subject> {
        self.subjects.iter_mut().find(|s| s.id() == id)
    }

    /// Append a subject and return its id
    pub fn push_subject(&mut self, subject: Subject) -> SubjectId {
        let id = subject.id();
        self.subjects.push(subject);
        id
    }

    /// Remove a subject by id
    ///
    /// # Returns
    /// The removed subject, or `None` if it isn't in this semester
    pub fn remove_subject(&mut self, id: SubjectId) -> Option<Subject> {
        let pos = self.subjects.iter().position(|s| s.id() == id)?;
        Some(self.subjects.remove(pos))
    }

    /// Sum of subject credits
    #[must_use]
    pub fn total_credits(&self) -> u64 {
        self.subjects.iter().map(|s| u64::from(s.credits)).sum()
    }

    /// Semester GPA under `scale`, derived from the current subjects
    #[must_use]
    pub fn gpa(&self, scale: GradeScale) -> f64 {
        gpa::semester_gpa(&self.subjects, scale)
    }

    /// Number of subjects
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }
}
