//! Record-store key conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of JSON documents in the ArtSaaS bucket. Assessments nest under
//! the owning user so a history listing is a single prefix scan.

use uuid::Uuid;

pub fn user(id: Uuid) -> String {
    format!("users/{id}.json")
}

pub const USERS_PREFIX: &str = "users/";

pub fn artist(id: Uuid) -> String {
    format!("artists/{id}.json")
}

pub const ARTISTS_PREFIX: &str = "artists/";

pub fn artwork(id: Uuid) -> String {
    format!("artworks/{id}.json")
}

pub const ARTWORKS_PREFIX: &str = "artworks/";

pub fn artwork_image(artwork_id: Uuid, filename: &str) -> String {
    format!("artwork-images/{artwork_id}/{filename}")
}

pub fn artwork_images_prefix(artwork_id: Uuid) -> String {
    format!("artwork-images/{artwork_id}/")
}

pub fn mentorship_request(id: Uuid) -> String {
    format!("mentorship/requests/{id}.json")
}

pub const MENTORSHIP_REQUESTS_PREFIX: &str = "mentorship/requests/";

pub fn mentorship_session(id: Uuid) -> String {
    format!("mentorship/sessions/{id}.json")
}

pub const MENTORSHIP_SESSIONS_PREFIX: &str = "mentorship/sessions/";

pub fn assessment(user: Uuid, id: Uuid) -> String {
    format!("assessments/{user}/{id}.json")
}

pub fn user_assessments_prefix(user: Uuid) -> String {
    format!("assessments/{user}/")
}

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn donation(id: Uuid) -> String {
    format!("donations/{id}.json")
}

pub const DONATIONS_PREFIX: &str = "donations/";
