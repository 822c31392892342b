//! Engine scenarios and properties over the public API

use cgpa_calc::core::gpa::{cumulative_gpa, semester_gpa, GpaCalculator, UnknownGradePolicy};
use cgpa_calc::core::models::{AcademicRecord, Semester, Subject, SubjectEdit};
use cgpa_calc::core::scale::GradeScale;

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn a_and_b() -> Vec<Subject> {
    vec![Subject::new("A subject", 3, "A"), Subject::new("B subject", 4, "B")]
}

#[test]
fn scenario_a_four_point() {
    let gpa = semester_gpa(&a_and_b(), GradeScale::FourPoint);
    assert!(close(gpa, (4.0 * 3.0 + 3.0 * 4.0) / 7.0));
}

#[test]
fn scenario_b_ten_point() {
    let gpa = semester_gpa(&a_and_b(), GradeScale::TenPoint);
    assert!(close(gpa, (9.0 * 3.0 + 6.0 * 4.0) / 7.0));
}

#[test]
fn scenario_c_two_semesters() {
    let mut record = AcademicRecord::new(GradeScale::FourPoint);
    let first = record.add_semester();
    for subject in a_and_b() {
        record.push_subject(first, subject).unwrap();
    }
    let second = record.add_semester();
    record
        .push_subject(second, Subject::new("Failed", 3, "F"))
        .unwrap();

    let cumulative = record.cumulative();
    assert!(close(cumulative.cgpa, 2.4));
    assert_eq!(cumulative.total_credits, 10);
}

#[test]
fn scenario_d_unknown_grade_counts_credits() {
    let subjects = vec![Subject::new("Known", 5, "A"), Subject::new("Odd", 5, "Z")];
    let gpa = semester_gpa(&subjects, GradeScale::FourPoint);
    assert!(close(gpa, 2.0));
}

#[test]
fn unknown_grade_can_be_excluded() {
    let subjects = vec![Subject::new("Known", 5, "A"), Subject::new("Odd", 5, "Z")];
    let calc = GpaCalculator::new(GradeScale::FourPoint)
        .with_policy(UnknownGradePolicy::ExcludeCredits);
    assert!(close(calc.semester_gpa(&subjects), 4.0));

    let mut semester = Semester::new("S");
    for subject in subjects {
        semester.push_subject(subject);
    }
    let cumulative = calc.cumulative_gpa(std::slice::from_ref(&semester));
    assert!(close(cumulative.cgpa, 4.0));
    assert_eq!(cumulative.total_credits, 10);
}

#[test]
fn weighted_average_matches_formula() {
    let subjects = vec![
        Subject::new("x", 2, "A-"),
        Subject::new("y", 5, "C+"),
        Subject::new("z", 1, "D"),
    ];
    let expected = (3.7 * 2.0 + 2.3 * 5.0 + 1.0 * 1.0) / 8.0;
    assert!(close(semester_gpa(&subjects, GradeScale::FourPoint), expected));
}

#[test]
fn degenerate_inputs_are_zero() {
    for scale in GradeScale::ALL {
        assert!(close(semester_gpa(&[], scale), 0.0));
        let zero = vec![Subject::new("a", 0, "A"), Subject::new("b", 0, "B")];
        assert!(close(semester_gpa(&zero, scale), 0.0));

        let cumulative = cumulative_gpa(&[], scale);
        assert!(close(cumulative.cgpa, 0.0));
        assert_eq!(cumulative.total_credits, 0);
    }
}

#[test]
fn switching_scale_reprojects_without_touching_grades() {
    let mut record = AcademicRecord::new(GradeScale::FourPoint);
    let sem = record.add_semester();
    record
        .push_subject(sem, Subject::new("Calc", 3, "B"))
        .unwrap();

    let before = record.cumulative().cgpa;
    record.set_scale(GradeScale::TenPoint);
    let after = record.cumulative().cgpa;

    assert!(close(before, 3.0));
    assert!(close(after, 6.0));
    assert_eq!(record.semesters()[0].subjects()[0].grade, "B");
}

#[test]
fn removing_a_semester_removes_its_contribution() {
    let mut record = AcademicRecord::new(GradeScale::FourPoint);
    let keep = record.add_semester();
    record
        .push_subject(keep, Subject::new("k", 4, "B+"))
        .unwrap();
    let drop = record.add_semester();
    record
        .push_subject(drop, Subject::new("d", 2, "F"))
        .unwrap();

    record.remove_semester(drop).unwrap();
    let cumulative = record.cumulative();
    assert!(close(cumulative.cgpa, 3.3));
    assert_eq!(cumulative.total_credits, 4);
}

#[test]
fn removing_a_subject_updates_semester_and_cumulative() {
    let mut record = AcademicRecord::new(GradeScale::TenPoint);
    let sem = record.add_semester();
    record
        .push_subject(sem, Subject::new("a", 3, "A+"))
        .unwrap();
    let low = record
        .push_subject(sem, Subject::new("b", 3, "C"))
        .unwrap();

    assert!(close(record.semester_gpa(sem).unwrap(), 6.5));
    record.remove_subject(sem, low).unwrap();
    assert!(close(record.semester_gpa(sem).unwrap(), 10.0));
    assert!(close(record.cumulative().cgpa, 10.0));
}

#[test]
fn editing_a_subject_is_seen_on_next_read() {
    let mut record = AcademicRecord::new(GradeScale::FourPoint);
    let sem = record.add_semester();
    let sub = record.add_subject(sem).unwrap();
    assert!(close(record.semester_gpa(sem).unwrap(), 4.0));

    record
        .edit_subject(sem, sub, SubjectEdit::Grade("C".to_string()))
        .unwrap();
    assert!(close(record.semester_gpa(sem).unwrap(), 2.0));
}

#[test]
fn cumulative_is_idempotent() {
    let mut record = AcademicRecord::new(GradeScale::FourPoint);
    let sem = record.add_semester();
    record
        .push_subject(sem, Subject::new("x", 3, "B-"))
        .unwrap();

    let first = record.cumulative();
    let second = record.cumulative();
    assert_eq!(first, second);
}
