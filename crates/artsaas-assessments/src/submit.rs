use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;
use crate::instruments::{gad7::Gad7, phq9::Phq9};
use crate::scoring::{
    classify_overall_risk, classify_severity, score_subscale, ResponseEntry, RiskTier, Severity,
};
use crate::Instrument;

/// Which instrument catalog(s) a submission covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AssessmentKind {
    Phq9,
    Gad7,
    Combined,
}

impl AssessmentKind {
    /// Number of responses a complete submission of this kind carries.
    pub fn expected_responses(&self) -> usize {
        let phq9 = if self.administers_phq9() { Phq9.questions().len() } else { 0 };
        let gad7 = if self.administers_gad7() { Gad7.questions().len() } else { 0 };
        phq9 + gad7
    }

    pub fn administers_phq9(&self) -> bool {
        matches!(self, AssessmentKind::Phq9 | AssessmentKind::Combined)
    }

    pub fn administers_gad7(&self) -> bool {
        matches!(self, AssessmentKind::Gad7 | AssessmentKind::Combined)
    }
}

/// The immutable result bundle of a scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredAssessment {
    pub phq9_score: u32,
    pub gad7_score: u32,
    pub total_score: u32,
    pub phq9_severity: Severity,
    pub gad7_severity: Severity,
    pub overall_risk: RiskTier,
    pub crisis_resources_provided: bool,
    pub follow_up_needed: bool,
}

/// Score a complete submission.
///
/// The response count must match the catalog(s) for `kind` exactly (9 for
/// PHQ-9, 7 for GAD-7, 16 combined); a subscale that is not administered
/// scores 0 with severity `none`. Validation is all-or-nothing, so no
/// partial bundle is ever returned, and identical inputs always yield
/// identical bundles.
pub fn submit_assessment(
    kind: AssessmentKind,
    responses: &[ResponseEntry],
) -> Result<ScoredAssessment, ScoringError> {
    let expected = kind.expected_responses();
    if responses.len() != expected {
        return Err(ScoringError::Incomplete {
            expected,
            answered: responses.len(),
        });
    }

    let phq9 = Phq9;
    let gad7 = Gad7;

    let phq9_score = if kind.administers_phq9() {
        score_subscale(responses, &phq9)?
    } else {
        0
    };
    let gad7_score = if kind.administers_gad7() {
        score_subscale(responses, &gad7)?
    } else {
        0
    };

    // Severity is `none` at score 0 or when the subscale was not
    // administered; the [0, 4] band would classify 0 identically.
    let phq9_severity = if phq9_score > 0 {
        classify_severity(phq9_score, &phq9)?
    } else {
        Severity::None
    };
    let gad7_severity = if gad7_score > 0 {
        classify_severity(gad7_score, &gad7)?
    } else {
        Severity::None
    };

    let total_score = phq9_score + gad7_score;
    let overall_risk = classify_overall_risk(total_score);

    Ok(ScoredAssessment {
        phq9_score,
        gad7_score,
        total_score,
        phq9_severity,
        gad7_severity,
        overall_risk,
        crisis_resources_provided: overall_risk == RiskTier::High,
        follow_up_needed: overall_risk != RiskTier::Low,
    })
}
