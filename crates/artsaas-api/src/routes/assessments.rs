use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use uuid::Uuid;

use artsaas_assessments::record::AssessmentRecord;
use artsaas_assessments::scoring::ResponseEntry;
use artsaas_assessments::submit::{submit_assessment, AssessmentKind};
use artsaas_audit::events::AuditEvent;
use artsaas_auth::jwt::AuthUser;
use artsaas_core::record_keys;
use artsaas_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SubmitAssessmentRequest {
    pub assessment_type: AssessmentKind,
    pub responses: Vec<ResponseEntry>,
}

#[derive(Deserialize)]
pub struct OwnerQuery {
    pub user: Option<Uuid>,
}

/// Admins may act on any user's assessments; everyone else only their own.
fn resolve_owner(caller: &AuthUser, requested: Option<Uuid>) -> Result<Uuid, ApiError> {
    match requested {
        Some(user) if user != caller.id => {
            if caller.role.is_admin() {
                Ok(user)
            } else {
                Err(ApiError::Forbidden(
                    "only admins may access another user's assessments".to_string(),
                ))
            }
        }
        _ => Ok(caller.id),
    }
}

/// Score and persist a submission. Validation is all-or-nothing: a failed
/// submission writes no record.
pub async fn create_assessment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let scored = submit_assessment(req.assessment_type, &req.responses)?;

    let now = jiff::Timestamp::now();
    let record = AssessmentRecord::from_submission(
        caller.id,
        req.assessment_type,
        req.responses,
        &scored,
        now,
    );

    records::save(
        &state.s3,
        &state.bucket,
        &record_keys::assessment(record.user, record.id),
        &record,
    )
    .await?;

    AuditEvent::new(
        "assessment.submitted",
        "assessment",
        record.id.to_string(),
        caller.id.to_string(),
    )
    .with_details(serde_json::json!({
        "assessment_type": record.assessment_type,
        "overall_risk_level": record.overall_risk_level,
        "follow_up_needed": record.follow_up_needed,
    }))
    .emit();

    Ok(Json(record))
}

pub async fn list_assessments(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let owner = resolve_owner(&caller, query.user)?;

    let mut assessments: Vec<AssessmentRecord> = records::list_prefix(
        &state.s3,
        &state.bucket,
        &record_keys::user_assessments_prefix(owner),
    )
    .await?;
    assessments.sort_by(|a, b| b.assessment_date.cmp(&a.assessment_date));

    Ok(Json(assessments))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Query(query): Query<OwnerQuery>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let owner = resolve_owner(&caller, query.user)?;
    let record = records::load(
        &state.s3,
        &state.bucket,
        &record_keys::assessment(owner, id),
    )
    .await?;
    Ok(Json(record))
}

#[derive(Deserialize)]
pub struct ReviewRequest {
    /// Owner of the assessment under review.
    pub user: Uuid,
    pub admin_notes: Option<String>,
}

/// Mark a high-risk assessment as reviewed. Admin only; the scored fields
/// stay immutable.
pub async fn review_assessment(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    if !caller.role.is_admin() {
        return Err(ApiError::Forbidden("admin role required".to_string()));
    }

    let key = record_keys::assessment(req.user, id);
    let mut record: AssessmentRecord = records::load(&state.s3, &state.bucket, &key).await?;
    record.admin_reviewed = true;
    record.admin_notes = req.admin_notes;
    record.updated_at = jiff::Timestamp::now();
    records::save(&state.s3, &state.bucket, &key, &record).await?;

    AuditEvent::new(
        "assessment.reviewed",
        "assessment",
        id.to_string(),
        caller.id.to_string(),
    )
    .emit();

    Ok(Json(record))
}
