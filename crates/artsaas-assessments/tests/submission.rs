//! Tests for submission orchestration: the all-or-nothing validation gate,
//! the result bundle, and the derived record.
//!
//! Run with: `cargo test -p artsaas-assessments --test submission`

use artsaas_assessments::error::ScoringError;
use artsaas_assessments::instruments::{gad7::Gad7, phq9::Phq9};
use artsaas_assessments::record::AssessmentRecord;
use artsaas_assessments::scoring::{ResponseEntry, RiskTier, Severity};
use artsaas_assessments::submit::{submit_assessment, AssessmentKind};
use artsaas_assessments::Instrument;

fn answers(instrument: &dyn Instrument, value: f64) -> Vec<ResponseEntry> {
    instrument
        .questions()
        .iter()
        .map(|q| ResponseEntry {
            question_id: q.id.clone(),
            value,
        })
        .collect()
}

fn combined_answers(value: f64) -> Vec<ResponseEntry> {
    let mut responses = answers(&Phq9, value);
    responses.extend(answers(&Gad7, value));
    responses
}

#[test]
fn expected_response_counts() {
    assert_eq!(AssessmentKind::Phq9.expected_responses(), 9);
    assert_eq!(AssessmentKind::Gad7.expected_responses(), 7);
    assert_eq!(AssessmentKind::Combined.expected_responses(), 16);
}

/// A PHQ-9-only submission with every response at 3 hits the ceiling:
/// severe depression, high risk, both flags raised.
#[test]
fn phq9_all_threes() {
    let bundle = submit_assessment(AssessmentKind::Phq9, &answers(&Phq9, 3.0)).unwrap();

    assert_eq!(bundle.phq9_score, 27);
    assert_eq!(bundle.gad7_score, 0);
    assert_eq!(bundle.total_score, 27);
    assert_eq!(bundle.phq9_severity, Severity::Severe);
    assert_eq!(bundle.gad7_severity, Severity::None);
    assert_eq!(bundle.overall_risk, RiskTier::High);
    assert!(bundle.crisis_resources_provided);
    assert!(bundle.follow_up_needed);
}

/// A combined submission with every response at 0 is the floor: both
/// severities `none`, low risk, no flags.
#[test]
fn combined_all_zeros() {
    let bundle = submit_assessment(AssessmentKind::Combined, &combined_answers(0.0)).unwrap();

    assert_eq!(bundle.total_score, 0);
    assert_eq!(bundle.phq9_severity, Severity::None);
    assert_eq!(bundle.gad7_severity, Severity::None);
    assert_eq!(bundle.overall_risk, RiskTier::Low);
    assert!(!bundle.crisis_resources_provided);
    assert!(!bundle.follow_up_needed);
}

/// Medium risk raises the follow-up flag but not the crisis flag.
#[test]
fn medium_risk_flags() {
    // 9 responses: 1,1,1,1,1,1,1,1,2 → total 10.
    let mut responses = answers(&Phq9, 1.0);
    responses[8].value = 2.0;
    let bundle = submit_assessment(AssessmentKind::Phq9, &responses).unwrap();

    assert_eq!(bundle.total_score, 10);
    assert_eq!(bundle.overall_risk, RiskTier::Medium);
    assert!(!bundle.crisis_resources_provided);
    assert!(bundle.follow_up_needed);
}

/// A GAD-7-only submission leaves the PHQ-9 subscale at zero, and the two
/// subscale scores add into the combined total.
#[test]
fn gad7_only_totals() {
    let bundle = submit_assessment(AssessmentKind::Gad7, &answers(&Gad7, 2.0)).unwrap();

    assert_eq!(bundle.phq9_score, 0);
    assert_eq!(bundle.gad7_score, 14);
    assert_eq!(bundle.total_score, 14);
    assert_eq!(bundle.phq9_severity, Severity::None);
    assert_eq!(bundle.gad7_severity, Severity::Moderate);
    assert_eq!(bundle.overall_risk, RiskTier::Medium);
}

/// Identical inputs always yield identical bundles.
#[test]
fn submission_is_idempotent() {
    let responses = combined_answers(2.0);
    let first = submit_assessment(AssessmentKind::Combined, &responses).unwrap();
    let second = submit_assessment(AssessmentKind::Combined, &responses).unwrap();

    assert_eq!(first, second);
}

#[test]
fn missing_response_rejects_whole_submission() {
    let mut responses = answers(&Phq9, 3.0);
    responses.pop();

    assert_eq!(
        submit_assessment(AssessmentKind::Phq9, &responses),
        Err(ScoringError::Incomplete {
            expected: 9,
            answered: 8,
        })
    );
}

#[test]
fn excess_responses_reject_whole_submission() {
    let responses = combined_answers(1.0);

    assert_eq!(
        submit_assessment(AssessmentKind::Phq9, &responses),
        Err(ScoringError::Incomplete {
            expected: 9,
            answered: 16,
        })
    );
}

/// A duplicated question id passes the count gate but leaves another
/// catalog question unanswered.
#[test]
fn duplicate_question_id_is_incomplete() {
    let mut responses = answers(&Phq9, 1.0);
    responses[8].question_id = "phq1".to_string();

    assert_eq!(
        submit_assessment(AssessmentKind::Phq9, &responses),
        Err(ScoringError::Incomplete {
            expected: 9,
            answered: 8,
        })
    );
}

/// An unknown question id likewise counts toward the gate but answers
/// nothing in the catalog.
#[test]
fn unknown_question_id_is_incomplete() {
    let mut responses = answers(&Gad7, 1.0);
    responses[0].question_id = "gad99".to_string();

    assert!(matches!(
        submit_assessment(AssessmentKind::Gad7, &responses),
        Err(ScoringError::Incomplete { .. })
    ));
}

#[test]
fn out_of_range_value_rejects_whole_submission() {
    let mut responses = answers(&Gad7, 1.0);
    responses[3].value = 4.0;

    assert_eq!(
        submit_assessment(AssessmentKind::Gad7, &responses),
        Err(ScoringError::InvalidResponseValue {
            question_id: "gad4".to_string(),
            value: 4.0,
        })
    );
}

#[test]
fn record_carries_scores_and_review_defaults() {
    let responses = answers(&Phq9, 3.0);
    let scored = submit_assessment(AssessmentKind::Phq9, &responses).unwrap();
    let user = uuid::Uuid::new_v4();
    let now = jiff::Timestamp::now();

    let record = AssessmentRecord::from_submission(
        user,
        AssessmentKind::Phq9,
        responses.clone(),
        &scored,
        now,
    );

    assert_eq!(record.user, user);
    assert_eq!(record.responses.len(), responses.len());
    assert_eq!(record.total_score, 27);
    assert_eq!(record.overall_risk_level, RiskTier::High);
    assert!(record.crisis_resources_provided);
    assert!(record.follow_up_needed);
    assert!(!record.admin_reviewed);
    assert_eq!(record.admin_notes, None);
    assert!(record.is_complete);
    assert_eq!(record.created_at, now);
}
