use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MentorshipType {
    InPerson,
    Virtual,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MentorshipFrequency {
    Weekly,
    BiWeekly,
    Monthly,
    AsNeeded,
}

/// An artist's request to be mentored by a volunteer. Both parties are user
/// references.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MentorshipRequest {
    pub id: Uuid,
    pub artist: Uuid,
    pub volunteer: Uuid,
    pub status: RequestStatus,
    pub request_message: String,
    pub response_message: Option<String>,
    pub preferred_mentorship_type: MentorshipType,
    pub preferred_frequency: Option<MentorshipFrequency>,
    pub goals: Option<String>,
    pub requested_at: jiff::Timestamp,
    pub responded_at: Option<jiff::Timestamp>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
    Completed,
}

/// A single mentoring session under an accepted request.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MentorshipSession {
    pub id: Uuid,
    pub mentorship_request: Uuid,
    pub artist: Uuid,
    pub volunteer: Uuid,
    pub session_date: jiff::Timestamp,
    pub duration_minutes: u32,
    pub session_type: SessionType,
    pub location: Option<String>,
    pub meeting_link: Option<String>,
    pub session_notes: Option<String>,
    /// 1–5 satisfaction ratings, one per party.
    pub artist_rating: Option<u8>,
    pub volunteer_rating: Option<u8>,
    pub artist_feedback: Option<String>,
    pub volunteer_feedback: Option<String>,
    pub status: SessionStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionType {
    InPerson,
    Virtual,
    PhoneCall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SessionStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}
