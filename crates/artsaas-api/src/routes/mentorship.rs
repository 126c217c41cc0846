use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use artsaas_audit::events::AuditEvent;
use artsaas_auth::jwt::AuthUser;
use artsaas_core::models::mentorship::{MentorshipRequest, MentorshipSession, RequestStatus};
use artsaas_core::record_keys;
use artsaas_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RequestFilter {
    pub artist: Option<Uuid>,
    pub volunteer: Option<Uuid>,
    pub status: Option<RequestStatus>,
}

pub async fn list_requests(
    State(state): State<AppState>,
    Query(filter): Query<RequestFilter>,
) -> Result<Json<Vec<MentorshipRequest>>, ApiError> {
    let mut requests: Vec<MentorshipRequest> = records::list_prefix(
        &state.s3,
        &state.bucket,
        record_keys::MENTORSHIP_REQUESTS_PREFIX,
    )
    .await?;

    if let Some(artist) = filter.artist {
        requests.retain(|r| r.artist == artist);
    }
    if let Some(volunteer) = filter.volunteer {
        requests.retain(|r| r.volunteer == volunteer);
    }
    if let Some(status) = filter.status {
        requests.retain(|r| r.status == status);
    }

    requests.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));

    Ok(Json(requests))
}

pub async fn create_request(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(request): Json<MentorshipRequest>,
) -> Result<Json<MentorshipRequest>, ApiError> {
    if request.artist != caller.id && !caller.role.is_admin() {
        return Err(ApiError::Forbidden(
            "mentorship requests can only be opened by the requesting artist".to_string(),
        ));
    }

    records::save(
        &state.s3,
        &state.bucket,
        &record_keys::mentorship_request(request.id),
        &request,
    )
    .await?;

    AuditEvent::new(
        "mentorship.requested",
        "mentorship_request",
        request.id.to_string(),
        caller.id.to_string(),
    )
    .emit();

    Ok(Json(request))
}

#[derive(Deserialize)]
pub struct RespondRequest {
    pub accept: bool,
    pub response_message: Option<String>,
}

/// Accept or reject a pending request. Only the addressed volunteer (or an
/// admin) may respond, and only once.
pub async fn respond_to_request(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<RespondRequest>,
) -> Result<Json<MentorshipRequest>, ApiError> {
    let key = record_keys::mentorship_request(id);
    let mut request: MentorshipRequest = records::load(&state.s3, &state.bucket, &key).await?;

    if request.volunteer != caller.id && !caller.role.is_admin() {
        return Err(ApiError::Forbidden(
            "only the addressed volunteer may respond".to_string(),
        ));
    }
    if request.status != RequestStatus::Pending {
        return Err(ApiError::BadRequest(format!(
            "request has already been responded to (status: {:?})",
            request.status
        )));
    }

    let now = jiff::Timestamp::now();
    request.status = if req.accept {
        RequestStatus::Accepted
    } else {
        RequestStatus::Rejected
    };
    request.response_message = req.response_message;
    request.responded_at = Some(now);
    request.updated_at = now;

    records::save(&state.s3, &state.bucket, &key, &request).await?;

    AuditEvent::new(
        "mentorship.responded",
        "mentorship_request",
        id.to_string(),
        caller.id.to_string(),
    )
    .emit();

    Ok(Json(request))
}

#[derive(Deserialize)]
pub struct SessionFilter {
    pub mentorship_request: Option<Uuid>,
}

pub async fn list_sessions(
    State(state): State<AppState>,
    Query(filter): Query<SessionFilter>,
) -> Result<Json<Vec<MentorshipSession>>, ApiError> {
    let mut sessions: Vec<MentorshipSession> = records::list_prefix(
        &state.s3,
        &state.bucket,
        record_keys::MENTORSHIP_SESSIONS_PREFIX,
    )
    .await?;

    if let Some(request) = filter.mentorship_request {
        sessions.retain(|s| s.mentorship_request == request);
    }

    sessions.sort_by(|a, b| b.session_date.cmp(&a.session_date));

    Ok(Json(sessions))
}

pub async fn create_session(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(session): Json<MentorshipSession>,
) -> Result<Json<MentorshipSession>, ApiError> {
    ensure_session_party(&caller, &session)?;
    records::save(
        &state.s3,
        &state.bucket,
        &record_keys::mentorship_session(session.id),
        &session,
    )
    .await?;
    Ok(Json(session))
}

pub async fn update_session(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(mut session): Json<MentorshipSession>,
) -> Result<Json<MentorshipSession>, ApiError> {
    ensure_session_party(&caller, &session)?;
    session.id = id;
    records::save(
        &state.s3,
        &state.bucket,
        &record_keys::mentorship_session(id),
        &session,
    )
    .await?;
    Ok(Json(session))
}

fn ensure_session_party(caller: &AuthUser, session: &MentorshipSession) -> Result<(), ApiError> {
    if session.artist != caller.id && session.volunteer != caller.id && !caller.role.is_admin() {
        return Err(ApiError::Forbidden(
            "sessions can only be managed by their participants".to_string(),
        ));
    }
    Ok(())
}
