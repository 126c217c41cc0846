use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;
use crate::Instrument;

/// Highest value a single questionnaire response can take.
pub const MAX_RESPONSE_VALUE: u8 = 3;

/// A single question within an instrument catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: String,
}

/// One of the four answer options shared by every PHQ-9 and GAD-7 question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: String,
    pub description: String,
}

/// The fixed answer options presented for every question, keyed by how often
/// the symptom occurred over the last two weeks.
pub fn response_options() -> &'static [ResponseOption] {
    static OPTIONS: LazyLock<Vec<ResponseOption>> = LazyLock::new(|| {
        [
            (0, "Not at all", "0 days"),
            (1, "Several days", "1-7 days"),
            (2, "More than half the days", "8-14 days"),
            (3, "Nearly every day", "15+ days"),
        ]
        .iter()
        .map(|(value, label, description)| ResponseOption {
            value: *value,
            label: label.to_string(),
            description: description.to_string(),
        })
        .collect()
    });
    &OPTIONS
}

/// A (question, value) pair as posted by the assessment form.
///
/// The value arrives as a raw JSON number; [`score_subscale`] rejects
/// anything that is not a whole number in [0, 3].
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseEntry {
    pub question_id: String,
    pub value: f64,
}

/// Severity label for a scored subscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    None,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

/// A labeled, inclusive score range within an instrument's banding table.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub min: u32,
    pub max: u32,
    pub severity: Severity,
    pub label: String,
}

impl SeverityBand {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Coarse risk classification derived from the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Medium,
    /// Triggers crisis-resource and follow-up flags.
    High,
    /// Stored records admit this tier, but [`classify_overall_risk`] never
    /// produces it: no score threshold for it is defined.
    Crisis,
}

/// Sum the responses for every question in `instrument`'s catalog.
///
/// Each catalog question must have a response with a whole-number value in
/// [0, 3]. Responses for questions outside the catalog are ignored, and the
/// order of `responses` does not affect the result. No partial sum is ever
/// returned.
pub fn score_subscale(
    responses: &[ResponseEntry],
    instrument: &dyn Instrument,
) -> Result<u32, ScoringError> {
    let questions = instrument.questions();

    let answered = questions
        .iter()
        .filter(|q| responses.iter().any(|r| r.question_id == q.id))
        .count();
    if answered < questions.len() {
        return Err(ScoringError::Incomplete {
            expected: questions.len(),
            answered,
        });
    }

    let mut total = 0u32;
    for question in questions {
        if let Some(entry) = responses.iter().find(|r| r.question_id == question.id) {
            total += u32::from(response_value(entry)?);
        }
    }
    Ok(total)
}

fn response_value(entry: &ResponseEntry) -> Result<u8, ScoringError> {
    let value = entry.value;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(MAX_RESPONSE_VALUE) {
        return Err(ScoringError::InvalidResponseValue {
            question_id: entry.question_id.clone(),
            value,
        });
    }
    Ok(value as u8)
}

/// Map a subscale score onto the instrument's severity banding table.
///
/// Errors only if `score` exceeds the instrument maximum, which no
/// [`score_subscale`] output can do.
pub fn classify_severity(
    score: u32,
    instrument: &dyn Instrument,
) -> Result<Severity, ScoringError> {
    instrument
        .bands()
        .iter()
        .find(|band| band.contains(score))
        .map(|band| band.severity)
        .ok_or_else(|| ScoringError::ScoreOutOfRange {
            instrument: instrument.id().to_string(),
            score,
            max: instrument.max_score(),
        })
}

/// Classify the combined score into a risk tier.
///
/// Subscales that were not administered contribute 0 to the total.
pub fn classify_overall_risk(total_score: u32) -> RiskTier {
    if total_score >= 20 {
        RiskTier::High
    } else if total_score >= 10 {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}
