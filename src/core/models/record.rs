//! Academic record model
//!
//! The record is the aggregate root: it owns every semester and, through
//! them, every subject. All edits go through the methods here so that the
//! derived GPA figures can never drift from the data they summarise.

use super::{SemesterId, Semester, Subject, SubjectEdit, SubjectId};
use crate::core::gpa::{self, CumulativeGpa};
use crate::core::scale::GradeScale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to find the semester or subject an edit refers to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// No semester with this id
    #[error("semester {0} not found")]
    SemesterNotFound(SemesterId),
    /// No subject with this id in the given semester
    #[error("subject {subject} not found in semester {semester}")]
    SubjectNotFound {
        /// Semester that was searched
        semester: SemesterId,
        /// Subject that was missing
        subject: SubjectId,
    },
}

/// Ordered semesters plus the active grade scale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicRecord {
    semesters: Vec<Semester>,
    scale: GradeScale,
}

impl AcademicRecord {
    /// Create an empty record using `scale`
    #[must_use]
    pub const fn new(scale: GradeScale) -> Self {
        Self {
            semesters: Vec::new(),
            scale,
        }
    }

    /// Active grade scale
    #[must_use]
    pub const fn scale(&self) -> GradeScale {
        self.scale
    }

    /// Switch the active scale. Stored grades are left as they are and are
    /// reinterpreted against the new table on the next computation.
    pub fn set_scale(&mut self, scale: GradeScale) {
        self.scale = scale;
    }

    /// Semesters in display order
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.semesters
    }

    /// Look up a semester by id
    #[must_use]
    pub fn semester(&self, id: SemesterId) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id() == id)
    }

    fn semester_mut(&mut self, id: SemesterId) -> Result<&mut Semester, RecordError> {
        self.semesters
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or(RecordError::SemesterNotFound(id))
    }

    /// Append an empty semester named "Semester N", N being its position
    pub fn add_semester(&mut self) -> SemesterId {
        let name = format!("Semester {}", self.semesters.len() + 1);
        self.push_semester(Semester::new(name))
    }

    /// Append an already-built semester
    pub fn push_semester(&mut self, semester: Semester) -> SemesterId {
        let id = semester.id();
        self.semesters.push(semester);
        id
    }

    /// Remove a semester together with its subjects
    ///
    /// # Errors
    /// Returns [`RecordError::SemesterNotFound`] if no semester has this id
    pub fn remove_semester(&mut self, id: SemesterId) -> Result<Semester, RecordError> {
        let pos = self
            .semesters
            .iter()
            .position(|s| s.id() == id)
            .ok_or(RecordError::SemesterNotFound(id))?;
        Ok(self.semesters.remove(pos))
    }

    /// Rename a semester
    ///
    /// # Errors
    /// Returns [`RecordError::SemesterNotFound`] if no semester has this id
    pub fn rename_semester(
        &mut self,
        id: SemesterId,
        name: impl Into<String>,
    ) -> Result<(), RecordError> {
        self.semester_mut(id)?.name = name.into();
        Ok(())
    }

    /// Add a default subject (empty name, 3 credits, grade "A") to a semester
    ///
    /// # Errors
    /// Returns [`RecordError::SemesterNotFound`] if no semester has this id
    pub fn add_subject(&mut self, semester: SemesterId) -> Result<SubjectId, RecordError> {
        self.push_subject(semester, Subject::default())
    }

    /// Add a prepared subject to a semester
    ///
    /// # Errors
    /// Returns [`RecordError::SemesterNotFound`] if no semester has this id
    pub fn push_subject(
        &mut self,
        semester: SemesterId,
        subject: Subject,
    ) -> Result<SubjectId, RecordError> {
        Ok(self.semester_mut(semester)?.push_subject(subject))
    }

    /// Remove one subject
    ///
    /// # Errors
    /// Returns an error if the semester or the subject does not exist
    pub fn remove_subject(
        &mut self,
        semester: SemesterId,
        subject: SubjectId,
    ) -> Result<Subject, RecordError> {
        self.semester_mut(semester)?
            .remove_subject(subject)
            .ok_or(RecordError::SubjectNotFound { semester, subject })
    }

    /// Change one field of a subject
    ///
    /// # Errors
    /// Returns an error if the semester or the subject does not exist
    pub fn edit_subject(
        &mut self,
        semester: SemesterId,
        subject: SubjectId,
        edit: SubjectEdit,
    ) -> Result<(), RecordError> {
        self.semester_mut(semester)?
            .subject_mut(subject)
            .ok_or(RecordError::SubjectNotFound { semester, subject })?
            .apply(edit);
        Ok(())
    }

    /// Drop every semester. The scale is kept.
    pub fn reset(&mut self) {
        self.semesters.clear();
    }

    /// GPA of one semester under the active scale
    #[must_use]
    pub fn semester_gpa(&self, id: SemesterId) -> Option<f64> {
        self.semester(id).map(|s| s.gpa(self.scale))
    }

    /// CGPA and total credits under the active scale
    #[must_use]
    pub fn cumulative(&self) -> CumulativeGpa {
        gpa::cumulative_gpa(&self.semesters, self.scale)
    }

    /// Id of the semester at a 1-based display position
    #[must_use]
    pub fn semester_id_at(&self, position: usize) -> Option<SemesterId> {
        position
            .checked_sub(1)
            .and_then(|idx| self.semesters.get(idx))
            .map(|s| s.id())
    }

    /// Id of the subject at a 1-based position within a semester
    #[must_use]
    pub fn subject_id_at(&self, semester: SemesterId, position: usize) -> Option<SubjectId> {
        let idx = position.checked_sub(1)?;
        self.semester(semester)?.subjects().get(idx).map(|s| s.id())
    }

    /// Number of subjects across all semesters
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.semesters.iter().map(Semester::subject_count).sum()
    }

    /// Whether the record has no semesters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_subjects() -> (AcademicRecord, SemesterId) {
        let mut record = AcademicRecord::new(GradeScale::FourPoint);
        let sem = record.add_semester();
        record
            .push_subject(sem, Subject::new("Calculus", 3, "A"))
            .unwrap();
        record
            .push_subject(sem, Subject::new("Physics", 4, "B"))
            .unwrap();
        (record, sem)
    }

    #[test]
    fn test_add_semester_auto_names() {
        let mut record = AcademicRecord::default();
        let first = record.add_semester();
        let second = record.add_semester();

        assert_eq!(record.semester(first).unwrap().name, "Semester 1");
        assert_eq!(record.semester(second).unwrap().name, "Semester 2");
        assert!(record.semester(first).unwrap().subjects().is_empty());
    }

    #[test]
    fn test_auto_name_uses_count_after_removal() {
        let mut record = AcademicRecord::default();
        let first = record.add_semester();
        record.add_semester();
        record.remove_semester(first).unwrap();

        let third = record.add_semester();
        assert_eq!(record.semester(third).unwrap().name, "Semester 2");
    }

    #[test]
    fn test_add_subject_defaults() {
        let mut record = AcademicRecord::default();
        let sem = record.add_semester();
        let sub = record.add_subject(sem).unwrap();

        let subject = record.semester(sem).unwrap().subject(sub).unwrap();
        assert_eq!(subject.name, "");
        assert_eq!(subject.credits, 3);
        assert_eq!(subject.grade, "A");
    }

    #[test]
    fn test_remove_semester_drops_subjects() {
        let (mut record, sem) = record_with_subjects();
        let removed = record.remove_semester(sem).unwrap();

        assert_eq!(removed.subject_count(), 2);
        assert!(record.is_empty());
        assert_eq!(record.subject_count(), 0);
        assert_eq!(record.cumulative().total_credits, 0);
    }

    #[test]
    fn test_missing_ids_are_errors() {
        let (mut record, sem) = record_with_subjects();
        let ghost_sem = SemesterId::new();
        let ghost_sub = SubjectId::new();
        let before = record.clone();

        assert_eq!(
            record.remove_semester(ghost_sem),
            Err(RecordError::SemesterNotFound(ghost_sem))
        );
        assert_eq!(
            record.remove_subject(sem, ghost_sub),
            Err(RecordError::SubjectNotFound {
                semester: sem,
                subject: ghost_sub
            })
        );
        assert!(record
            .edit_subject(sem, ghost_sub, SubjectEdit::Credits(1))
            .is_err());
        assert!(record.rename_semester(ghost_sem, "x").is_err());
        assert!(record.add_subject(ghost_sem).is_err());

        assert_eq!(record, before);
    }

    #[test]
    fn test_edit_subject_updates_gpa() {
        let (mut record, sem) = record_with_subjects();
        let physics = record.subject_id_at(sem, 2).unwrap();

        record
            .edit_subject(sem, physics, SubjectEdit::Grade("A".to_string()))
            .unwrap();

        assert!((record.semester_gpa(sem).unwrap() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_scale_keeps_grades() {
        let (mut record, sem) = record_with_subjects();
        record.set_scale(GradeScale::TenPoint);

        let grades: Vec<_> = record
            .semester(sem)
            .unwrap()
            .subjects()
            .iter()
            .map(|s| s.grade.clone())
            .collect();
        assert_eq!(grades, vec!["A", "B"]);
        assert!((record.semester_gpa(sem).unwrap() - 51.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_keeps_scale() {
        let (mut record, _) = record_with_subjects();
        record.set_scale(GradeScale::TenPoint);
        record.reset();

        assert!(record.is_empty());
        assert_eq!(record.scale(), GradeScale::TenPoint);
        assert!(record.cumulative().cgpa.abs() < f64::EPSILON);
    }

    #[test]
    fn test_positional_lookup() {
        let (record, sem) = record_with_subjects();
        assert_eq!(record.semester_id_at(1), Some(sem));
        assert_eq!(record.semester_id_at(0), None);
        assert_eq!(record.semester_id_at(2), None);
        assert!(record.subject_id_at(sem, 2).is_some());
        assert!(record.subject_id_at(sem, 3).is_none());
        assert!(record.subject_id_at(sem, 0).is_none());
    }
}
