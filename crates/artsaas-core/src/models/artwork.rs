use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Artwork {
    pub id: Uuid,
    pub artist: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub medium: String,
    pub dimensions: Option<String>,
    pub year_created: Option<i16>,
    /// Asking price in minor currency units; `None` when not priced.
    pub price_cents: Option<i64>,
    pub is_for_sale: bool,
    /// Object key of the primary image in the record store.
    pub image_key: Option<String>,
    pub status: ArtworkStatus,
    pub views: u64,
    pub likes: u64,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ArtworkStatus {
    Draft,
    Published,
    Sold,
    Archived,
}
