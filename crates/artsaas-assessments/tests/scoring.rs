//! Tests for subscale scoring, severity banding, and risk classification.
//!
//! Run with: `cargo test -p artsaas-assessments --test scoring`

use artsaas_assessments::error::ScoringError;
use artsaas_assessments::instruments::{gad7::Gad7, phq9::Phq9};
use artsaas_assessments::scoring::{
    classify_overall_risk, classify_severity, score_subscale, ResponseEntry, RiskTier, Severity,
};
use artsaas_assessments::{all_instruments, get_instrument, Instrument};

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

#[test]
fn registry_exposes_both_instruments() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["phq9", "gad7"]);

    assert!(get_instrument("phq9").is_some());
    assert!(get_instrument("gad7").is_some());
    assert!(get_instrument("basc3").is_none());
}

#[test]
fn catalogs_have_fixed_sizes_and_maxima() {
    assert_eq!(Phq9.questions().len(), 9);
    assert_eq!(Gad7.questions().len(), 7);
    assert_eq!(Phq9.max_score(), 27);
    assert_eq!(Gad7.max_score(), 21);
}

/// The subscale score is the exact integer sum of the response values.
#[test]
fn score_is_exact_sum() {
    let mut responses = answers(&Phq9, 0.0);
    responses[0].value = 3.0;
    responses[3].value = 2.0;
    responses[8].value = 1.0;

    assert_eq!(score_subscale(&responses, &Phq9).unwrap(), 6);
}

/// Summation is commutative: response order never changes the score.
#[test]
fn score_is_order_independent() {
    let mut responses: Vec<ResponseEntry> = Phq9
        .questions()
        .iter()
        .enumerate()
        .map(|(i, q)| ResponseEntry {
            question_id: q.id.clone(),
            value: (i % 4) as f64,
        })
        .collect();

    let forward = score_subscale(&responses, &Phq9).unwrap();
    responses.reverse();
    let reversed = score_subscale(&responses, &Phq9).unwrap();

    assert_eq!(forward, reversed);
}

/// Responses for questions outside the catalog are ignored, which is how a
/// combined submission scores each subscale from the shared response set.
#[test]
fn foreign_responses_are_ignored() {
    let mut responses = answers(&Gad7, 2.0);
    responses.extend(answers(&Phq9, 3.0));

    assert_eq!(score_subscale(&responses, &Gad7).unwrap(), 14);
}

#[test]
fn unanswered_question_is_incomplete() {
    let mut responses = answers(&Phq9, 1.0);
    responses.pop();

    assert_eq!(
        score_subscale(&responses, &Phq9),
        Err(ScoringError::Incomplete {
            expected: 9,
            answered: 8,
        })
    );
}

#[test]
fn value_above_three_is_invalid() {
    let mut responses = answers(&Phq9, 1.0);
    responses[4].value = 4.0;

    assert_eq!(
        score_subscale(&responses, &Phq9),
        Err(ScoringError::InvalidResponseValue {
            question_id: "phq5".to_string(),
            value: 4.0,
        })
    );
}

#[test]
fn fractional_and_negative_values_are_invalid() {
    let mut responses = answers(&Gad7, 0.0);
    responses[2].value = 1.5;
    assert!(matches!(
        score_subscale(&responses, &Gad7),
        Err(ScoringError::InvalidResponseValue { .. })
    ));

    responses[2].value = -1.0;
    assert!(matches!(
        score_subscale(&responses, &Gad7),
        Err(ScoringError::InvalidResponseValue { .. })
    ));
}

/// Every integer in the instrument's score range maps to exactly one band.
#[test]
fn bands_partition_the_score_range() {
    for instrument in all_instruments() {
        for score in 0..=instrument.max_score() {
            let matching = instrument
                .bands()
                .iter()
                .filter(|band| band.contains(score))
                .count();
            assert_eq!(
                matching,
                1,
                "{} score {score} matched {matching} bands",
                instrument.id()
            );
        }
    }
}

#[test]
fn severity_boundaries() {
    assert_eq!(classify_severity(4, &Phq9).unwrap(), Severity::None);
    assert_eq!(classify_severity(5, &Phq9).unwrap(), Severity::Mild);
    assert_eq!(classify_severity(19, &Phq9).unwrap(), Severity::ModeratelySevere);
    assert_eq!(classify_severity(20, &Phq9).unwrap(), Severity::Severe);

    // GAD-7 has no moderately-severe band; 15 is already severe.
    assert_eq!(classify_severity(14, &Gad7).unwrap(), Severity::Moderate);
    assert_eq!(classify_severity(15, &Gad7).unwrap(), Severity::Severe);
}

#[test]
fn severity_rejects_scores_above_maximum() {
    assert_eq!(
        classify_severity(28, &Phq9),
        Err(ScoringError::ScoreOutOfRange {
            instrument: "phq9".to_string(),
            score: 28,
            max: 27,
        })
    );
    assert_eq!(
        classify_severity(22, &Gad7),
        Err(ScoringError::ScoreOutOfRange {
            instrument: "gad7".to_string(),
            score: 22,
            max: 21,
        })
    );
}

#[test]
fn risk_tier_boundaries() {
    assert_eq!(classify_overall_risk(9), RiskTier::Low);
    assert_eq!(classify_overall_risk(10), RiskTier::Medium);
    assert_eq!(classify_overall_risk(19), RiskTier::Medium);
    assert_eq!(classify_overall_risk(20), RiskTier::High);
}

/// No combined total can ever classify as `crisis`.
#[test]
fn crisis_tier_is_never_produced() {
    let max_total = Phq9.max_score() + Gad7.max_score();
    for total in 0..=max_total {
        assert_ne!(classify_overall_risk(total), RiskTier::Crisis);
    }
}
