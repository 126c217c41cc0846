use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use artsaas_auth::jwt::AuthUser;
use artsaas_core::models::artist::{ArtistProfile, ExperienceLevel};
use artsaas_core::record_keys;
use artsaas_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ArtistFilter {
    pub medium: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub available_for_mentorship: Option<bool>,
}

/// Browse artist profiles, most-viewed first. Filtering is an in-memory
/// scan over the listed records.
pub async fn list_artists(
    State(state): State<AppState>,
    Query(filter): Query<ArtistFilter>,
) -> Result<Json<Vec<ArtistProfile>>, ApiError> {
    let mut artists: Vec<ArtistProfile> =
        records::list_prefix(&state.s3, &state.bucket, record_keys::ARTISTS_PREFIX).await?;

    if let Some(medium) = &filter.medium {
        artists.retain(|a| {
            a.artistic_mediums
                .iter()
                .any(|m| m.eq_ignore_ascii_case(medium))
        });
    }
    if let Some(level) = filter.experience_level {
        artists.retain(|a| a.experience_level == level);
    }
    if let Some(available) = filter.available_for_mentorship {
        artists.retain(|a| a.available_for_mentorship == available);
    }

    artists.sort_by(|a, b| b.portfolio_views.cmp(&a.portfolio_views));

    Ok(Json(artists))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ArtistProfile>, ApiError> {
    let artist = records::load(&state.s3, &state.bucket, &record_keys::artist(id)).await?;
    Ok(Json(artist))
}

pub async fn create_artist(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(artist): Json<ArtistProfile>,
) -> Result<Json<ArtistProfile>, ApiError> {
    ensure_profile_owner(&caller, &artist)?;
    records::save(
        &state.s3,
        &state.bucket,
        &record_keys::artist(artist.id),
        &artist,
    )
    .await?;
    Ok(Json(artist))
}

pub async fn update_artist(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(mut artist): Json<ArtistProfile>,
) -> Result<Json<ArtistProfile>, ApiError> {
    ensure_profile_owner(&caller, &artist)?;
    artist.id = id;
    records::save(&state.s3, &state.bucket, &record_keys::artist(id), &artist).await?;
    Ok(Json(artist))
}

fn ensure_profile_owner(caller: &AuthUser, artist: &ArtistProfile) -> Result<(), ApiError> {
    if artist.user != caller.id && !caller.role.is_admin() {
        return Err(ApiError::Forbidden(
            "artist profiles can only be managed by their owner".to_string(),
        ));
    }
    Ok(())
}
