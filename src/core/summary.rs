//! Frozen results of one aggregation pass
//!
//! A [`RecordSummary`] owns every number a renderer or exporter needs, so
//! producing a report never calls back into the engine or borrows the record
//! being edited.

use crate::core::gpa::{GpaCalculator, UnknownGradePolicy};
use crate::core::models::{AcademicRecord, Semester, Subject};
use crate::core::scale::GradeScale;
use crate::core::standing::Standing;
use serde::Serialize;

/// One subject as it contributed to the result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectLine {
    /// Display name
    pub name: String,
    /// Credit weight
    pub credits: u32,
    /// Letter grade as stored
    pub grade: String,
    /// Point value under the active scale; `None` when the grade is unknown
    pub points: Option<f64>,
}

impl SubjectLine {
    fn from_subject(subject: &Subject, scale: GradeScale) -> Self {
        Self {
            name: subject.name.clone(),
            credits: subject.credits,
            grade: subject.grade.clone(),
            points: scale.lookup(&subject.grade),
        }
    }
}

/// Per-semester figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    /// Semester name
    pub name: String,
    /// Semester GPA
    pub gpa: f64,
    /// Sum of subject credits
    pub credits: u64,
    /// Band the GPA falls into
    pub standing: Standing,
    /// Subjects in display order
    pub subjects: Vec<SubjectLine>,
}

/// Whole-record figures plus the semester breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSummary {
    /// Scale the figures were computed under
    pub scale: GradeScale,
    /// How unknown grades were counted
    pub policy: UnknownGradePolicy,
    /// Cumulative GPA
    pub cgpa: f64,
    /// Sum of every subject's credits
    pub total_credits: u64,
    /// Band the CGPA falls into
    pub standing: Standing,
    /// Per-semester breakdown, in record order
    pub semesters: Vec<SemesterSummary>,
}

impl RecordSummary {
    /// Compute the summary of `record` under its active scale
    #[must_use]
    pub fn from_record(record: &AcademicRecord, policy: UnknownGradePolicy) -> Self {
        let scale = record.scale();
        let calc = GpaCalculator::new(scale).with_policy(policy);
        let cumulative = calc.cumulative_gpa(record.semesters());

        let semesters = record
            .semesters()
            .iter()
            .map(|semester| Self::summarize_semester(&calc, semester))
            .collect();

        Self {
            scale,
            policy,
            cgpa: cumulative.cgpa,
            total_credits: cumulative.total_credits,
            standing: Standing::classify(cumulative.cgpa, scale),
            semesters,
        }
    }

    fn summarize_semester(calc: &GpaCalculator, semester: &Semester) -> SemesterSummary {
        let gpa = calc.semester_gpa(semester.subjects());
        SemesterSummary {
            name: semester.name.clone(),
            gpa,
            credits: semester.total_credits(),
            standing: Standing::classify(gpa, calc.scale()),
            subjects: semester
                .subjects()
                .iter()
                .map(|s| SubjectLine::from_subject(s, calc.scale()))
                .collect(),
        }
    }

    /// Number of semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.semesters.len()
    }

    /// Number of subjects across all semesters
    #[must_use]
    pub fn subject_count(&self) -> usize {
        self.semesters.iter().map(|s| s.subjects.len()).sum()
    }

    /// Grades in the record that the active scale does not recognise
    #[must_use]
    pub fn unknown_grades(&self) -> Vec<&str> {
        let mut grades: Vec<&str> = self
            .semesters
            .iter()
            .flat_map(|s| &s.subjects)
            .filter(|line| line.points.is_none())
            .map(|line| line.grade.as_str())
            .collect();
        grades.sort_unstable();
        grades.dedup();
        grades
    }
}
