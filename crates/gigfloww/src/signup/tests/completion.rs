use super::common::*;
use crate::signup::domain::ApplicationRecord;
use crate::signup::edits::RecordEdit;
use crate::signup::validation::{completion_report, compute_completion, RequiredField};

#[test]
fn six_of_ten_fields_scores_sixty() {
    let record = six_of_ten_record();

    let report = completion_report(&record);

    assert_eq!(report.percent, 60);
    assert_eq!(
        report.missing,
        vec![
            RequiredField::Portfolio,
            RequiredField::Bio,
            RequiredField::TechnicalSkills,
            RequiredField::ProblemSolvingExample,
        ]
    );
}

#[test]
fn completion_is_idempotent() {
    let record = six_of_ten_record();

    let first = compute_completion(&record);
    let second = compute_completion(&record);

    assert_eq!(first, second);
    assert_eq!(record, six_of_ten_record(), "scoring must not mutate the record");
}

#[test]
fn complete_record_scores_one_hundred() {
    let report = completion_report(&complete_record());
    assert_eq!(report.percent, 100);
    assert!(report.is_complete());
}

#[test]
fn each_field_is_worth_ten_points() {
    let record = ApplicationRecord::new()
        .apply(RecordEdit::SetName("Jo".to_string()))
        .expect("name applies");
    assert_eq!(compute_completion(&record), 10);

    let record = record
        .apply(RecordEdit::RateSkill {
            skill: "typescript".to_string(),
            rating: 1,
        })
        .expect("rating applies");
    assert_eq!(compute_completion(&record), 20);

    let record = record
        .apply(RecordEdit::SetProblemSolvingExample(" ".to_string()))
        .expect("example applies");
    assert_eq!(compute_completion(&record), 30, "any non-empty text counts");
}

#[test]
fn resetting_a_skill_to_zero_drops_the_point() {
    let record = complete_record()
        .apply(RecordEdit::RateSkill {
            skill: "react".to_string(),
            rating: 0,
        })
        .expect("rating applies");

    let report = completion_report(&record);
    assert_eq!(report.percent, 90);
    assert_eq!(report.missing, vec![RequiredField::TechnicalSkills]);
}
