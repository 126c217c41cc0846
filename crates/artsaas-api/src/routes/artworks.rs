use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use artsaas_auth::jwt::AuthUser;
use artsaas_core::models::artist::ArtistProfile;
use artsaas_core::models::artwork::{Artwork, ArtworkStatus};
use artsaas_core::record_keys;
use artsaas_storage::{objects, records};

use crate::error::ApiError;
use crate::state::AppState;

/// Presigned upload URLs stay valid long enough for a slow connection but
/// not much longer.
const UPLOAD_URL_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Deserialize)]
pub struct ArtworkFilter {
    pub artist: Option<Uuid>,
    pub status: Option<ArtworkStatus>,
}

pub async fn list_artworks(
    State(state): State<AppState>,
    Query(filter): Query<ArtworkFilter>,
) -> Result<Json<Vec<Artwork>>, ApiError> {
    let mut artworks: Vec<Artwork> =
        records::list_prefix(&state.s3, &state.bucket, record_keys::ARTWORKS_PREFIX).await?;

    if let Some(artist) = filter.artist {
        artworks.retain(|a| a.artist == artist);
    }
    if let Some(status) = filter.status {
        artworks.retain(|a| a.status == status);
    }

    artworks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(Json(artworks))
}

pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Artwork>, ApiError> {
    let artwork = records::load(&state.s3, &state.bucket, &record_keys::artwork(id)).await?;
    Ok(Json(artwork))
}

pub async fn create_artwork(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(artwork): Json<Artwork>,
) -> Result<Json<Artwork>, ApiError> {
    ensure_artwork_owner(&state, &caller, &artwork).await?;
    records::save(
        &state.s3,
        &state.bucket,
        &record_keys::artwork(artwork.id),
        &artwork,
    )
    .await?;
    Ok(Json(artwork))
}

pub async fn update_artwork(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(mut artwork): Json<Artwork>,
) -> Result<Json<Artwork>, ApiError> {
    ensure_artwork_owner(&state, &caller, &artwork).await?;
    artwork.id = id;
    records::save(&state.s3, &state.bucket, &record_keys::artwork(id), &artwork).await?;
    Ok(Json(artwork))
}

/// Delete an artwork and every image stored under it.
pub async fn delete_artwork(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let artwork: Artwork =
        records::load(&state.s3, &state.bucket, &record_keys::artwork(id)).await?;
    ensure_artwork_owner(&state, &caller, &artwork).await?;

    records::delete(&state.s3, &state.bucket, &record_keys::artwork(id)).await?;
    objects::delete_objects_by_prefix(
        &state.s3,
        &state.bucket,
        &record_keys::artwork_images_prefix(id),
    )
    .await?;

    Ok(Json(()))
}

#[derive(Deserialize)]
pub struct ImageUploadRequest {
    pub filename: String,
    pub content_type: String,
}

#[derive(Serialize)]
pub struct ImageUploadResponse {
    pub upload_url: String,
    pub key: String,
}

/// Issue a presigned PUT URL for the artwork's primary image and point the
/// record at the new key.
pub async fn create_image_upload(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<ImageUploadRequest>,
) -> Result<Json<ImageUploadResponse>, ApiError> {
    let mut artwork: Artwork =
        records::load(&state.s3, &state.bucket, &record_keys::artwork(id)).await?;
    ensure_artwork_owner(&state, &caller, &artwork).await?;

    let key = record_keys::artwork_image(id, &req.filename);
    let upload_url = objects::presign_put(
        &state.s3,
        &state.bucket,
        &key,
        Some(&req.content_type),
        UPLOAD_URL_TTL,
    )
    .await?;

    artwork.image_key = Some(key.clone());
    artwork.updated_at = jiff::Timestamp::now();
    records::save(&state.s3, &state.bucket, &record_keys::artwork(id), &artwork).await?;

    Ok(Json(ImageUploadResponse { upload_url, key }))
}

/// Artworks are managed through the owning artist profile.
async fn ensure_artwork_owner(
    state: &AppState,
    caller: &AuthUser,
    artwork: &Artwork,
) -> Result<(), ApiError> {
    if caller.role.is_admin() {
        return Ok(());
    }

    let profile: ArtistProfile = records::load(
        &state.s3,
        &state.bucket,
        &record_keys::artist(artwork.artist),
    )
    .await?;

    if profile.user != caller.id {
        return Err(ApiError::Forbidden(
            "artworks can only be managed by their artist".to_string(),
        ));
    }
    Ok(())
}
