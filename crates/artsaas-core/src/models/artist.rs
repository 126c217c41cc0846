use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::mentorship::MentorshipType;

/// An artist's public profile, separate from the auth user record.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArtistProfile {
    pub id: Uuid,
    pub user: Uuid,
    pub artistic_mediums: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub portfolio_website: Option<String>,
    pub instagram_handle: Option<String>,
    pub artistic_statement: Option<String>,
    pub available_for_mentorship: bool,
    pub preferred_mentorship_type: Option<MentorshipType>,
    pub portfolio_views: u64,
    /// Lifetime donations received, in minor currency units.
    pub total_donations_cents: i64,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}
