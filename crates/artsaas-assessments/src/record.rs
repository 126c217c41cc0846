use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::scoring::{ResponseEntry, RiskTier, Severity};
use crate::submit::{AssessmentKind, ScoredAssessment};

/// A stored assessment: raw responses plus the derived scores, kept together
/// for audit and history display. Created exactly once at submission time;
/// only the admin review fields change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub user: Uuid,
    pub assessment_type: AssessmentKind,
    pub assessment_date: jiff::Timestamp,
    pub responses: Vec<ResponseEntry>,
    pub phq9_score: u32,
    pub phq9_severity: Severity,
    pub gad7_score: u32,
    pub gad7_severity: Severity,
    pub total_score: u32,
    pub overall_risk_level: RiskTier,
    pub crisis_resources_provided: bool,
    pub follow_up_needed: bool,
    pub admin_reviewed: bool,
    pub admin_notes: Option<String>,
    pub is_complete: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl AssessmentRecord {
    /// Build the record persisted for a successfully scored submission.
    pub fn from_submission(
        user: Uuid,
        kind: AssessmentKind,
        responses: Vec<ResponseEntry>,
        scored: &ScoredAssessment,
        now: jiff::Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            assessment_type: kind,
            assessment_date: now,
            responses,
            phq9_score: scored.phq9_score,
            phq9_severity: scored.phq9_severity,
            gad7_score: scored.gad7_score,
            gad7_severity: scored.gad7_severity,
            total_score: scored.total_score,
            overall_risk_level: scored.overall_risk,
            crisis_resources_provided: scored.crisis_resources_provided,
            follow_up_needed: scored.follow_up_needed,
            admin_reviewed: false,
            admin_notes: None,
            is_complete: true,
            created_at: now,
            updated_at: now,
        }
    }
}
