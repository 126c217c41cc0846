use axum::body::Bytes;
use axum::extract::State;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use artsaas_audit::events::AuditEvent;
use artsaas_auth::jwt::AuthUser;
use artsaas_core::models::artist::ArtistProfile;
use artsaas_core::models::donation::{Currency, Donation, DonationStatus, DonationType};
use artsaas_core::record_keys;
use artsaas_payments::currency::parse_currency;
use artsaas_payments::fees::FeeSplit;
use artsaas_payments::intent::{create_payment_intent, CreatePaymentIntentParams};
use artsaas_payments::webhook::{parse_event, PaymentIntentObject, WebhookOutcome};
use artsaas_storage::error::StorageError;
use artsaas_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateDonationRequest {
    /// Artist profile receiving the donation.
    pub artist: Uuid,
    pub amount_cents: i64,
    pub currency: String,
    pub donation_type: DonationType,
    pub message: Option<String>,
    pub is_anonymous: bool,
}

#[derive(Serialize)]
pub struct DonationIntentResponse {
    pub donation: Donation,
    /// Handed to the frontend to confirm the payment with Stripe.
    pub client_secret: String,
}

/// Open a PaymentIntent and persist the pending donation with its fee split.
pub async fn create_donation_intent(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthUser>,
    Json(req): Json<CreateDonationRequest>,
) -> Result<Json<DonationIntentResponse>, ApiError> {
    let currency = parse_currency(&req.currency)?;

    let params = CreatePaymentIntentParams {
        amount_cents: req.amount_cents,
        currency,
        donor_id: caller.id,
        artist_id: req.artist,
        donation_type: req.donation_type,
        message: req.message.clone(),
        is_anonymous: req.is_anonymous,
    };
    let intent = create_payment_intent(&state.http, &state.stripe_secret_key, &params).await?;

    let split = FeeSplit::from_gross(req.amount_cents);
    let now = jiff::Timestamp::now();
    let donation = Donation {
        id: Uuid::new_v4(),
        donor: caller.id,
        artist: req.artist,
        amount_cents: req.amount_cents,
        currency,
        donation_type: req.donation_type,
        message: req.message,
        is_anonymous: req.is_anonymous,
        stripe_payment_intent_id: Some(intent.id.clone()),
        status: DonationStatus::Pending,
        platform_fee_cents: split.fee_cents,
        net_amount_cents: split.net_cents,
        processed_at: None,
        created_at: now,
        updated_at: now,
    };

    records::save(
        &state.s3,
        &state.bucket,
        &record_keys::donation(donation.id),
        &donation,
    )
    .await?;

    AuditEvent::new(
        "donation.intent_created",
        "donation",
        donation.id.to_string(),
        caller.id.to_string(),
    )
    .emit();

    Ok(Json(DonationIntentResponse {
        donation,
        client_secret: intent.client_secret,
    }))
}

/// Stripe webhook endpoint. Settles the pending donation for the intent, or
/// rebuilds one from intent metadata if no record exists yet.
pub async fn stripe_webhook(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<()>, ApiError> {
    let event = parse_event(&body)?;

    match event.outcome() {
        WebhookOutcome::Succeeded(intent) => {
            settle(&state, intent, DonationStatus::Completed).await?;
        }
        WebhookOutcome::Failed(intent) => {
            settle(&state, intent, DonationStatus::Failed).await?;
        }
        WebhookOutcome::Ignored { event_type } => {
            tracing::debug!(event_type, "ignoring webhook event");
        }
    }

    Ok(Json(()))
}

async fn settle(
    state: &AppState,
    intent: &PaymentIntentObject,
    status: DonationStatus,
) -> Result<(), ApiError> {
    let now = jiff::Timestamp::now();

    let donations: Vec<Donation> =
        records::list_prefix(&state.s3, &state.bucket, record_keys::DONATIONS_PREFIX).await?;
    let existing = donations
        .into_iter()
        .find(|d| d.stripe_payment_intent_id.as_deref() == Some(intent.id.as_str()));

    let mut donation = match existing {
        Some(donation) => donation,
        None => donation_from_intent(intent, now)?,
    };

    let split = match status {
        DonationStatus::Completed => FeeSplit::from_gross(donation.amount_cents),
        _ => FeeSplit::failed(donation.amount_cents),
    };
    donation.status = status;
    donation.platform_fee_cents = split.fee_cents;
    donation.net_amount_cents = split.net_cents;
    donation.processed_at = Some(now);
    donation.updated_at = now;

    records::save(
        &state.s3,
        &state.bucket,
        &record_keys::donation(donation.id),
        &donation,
    )
    .await?;

    if status == DonationStatus::Completed {
        credit_artist(state, &donation, split.net_cents, now).await?;
    }

    AuditEvent::new(
        "donation.settled",
        "donation",
        donation.id.to_string(),
        "stripe".to_string(),
    )
    .with_details(serde_json::json!({
        "status": donation.status,
        "payment_intent": intent.id,
    }))
    .emit();

    Ok(())
}

/// Add the net amount to the artist's lifetime total. A missing profile is
/// logged, not fatal: the donation record itself is already settled.
async fn credit_artist(
    state: &AppState,
    donation: &Donation,
    net_cents: i64,
    now: jiff::Timestamp,
) -> Result<(), ApiError> {
    let key = record_keys::artist(donation.artist);
    match records::load::<ArtistProfile>(&state.s3, &state.bucket, &key).await {
        Ok(mut profile) => {
            profile.total_donations_cents += net_cents;
            profile.updated_at = now;
            records::save(&state.s3, &state.bucket, &key, &profile).await?;
            Ok(())
        }
        Err(StorageError::NotFound { .. }) => {
            tracing::warn!(artist = %donation.artist, "donation settled for unknown artist profile");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Rebuild a donation from the intent metadata attached at creation time.
fn donation_from_intent(
    intent: &PaymentIntentObject,
    now: jiff::Timestamp,
) -> Result<Donation, ApiError> {
    let metadata = &intent.metadata;

    let donor = parse_metadata_id(metadata.donor_id.as_deref(), "donor_id")?;
    let artist = parse_metadata_id(metadata.artist_id.as_deref(), "artist_id")?;
    let donation_type = metadata
        .donation_type
        .as_deref()
        .map(DonationType::from_metadata)
        .transpose()?
        .unwrap_or(DonationType::OneTime);
    let currency = Currency::from_code(&intent.currency)?;

    Ok(Donation {
        id: Uuid::new_v4(),
        donor,
        artist,
        amount_cents: intent.amount,
        currency,
        donation_type,
        message: metadata.message.clone().filter(|m| !m.is_empty()),
        is_anonymous: metadata.is_anonymous(),
        stripe_payment_intent_id: Some(intent.id.clone()),
        status: DonationStatus::Pending,
        platform_fee_cents: 0,
        net_amount_cents: 0,
        processed_at: None,
        created_at: now,
        updated_at: now,
    })
}

fn parse_metadata_id(value: Option<&str>, field: &str) -> Result<Uuid, ApiError> {
    value
        .ok_or_else(|| ApiError::BadRequest(format!("intent metadata missing {field}")))?
        .parse::<Uuid>()
        .map_err(|_| ApiError::BadRequest(format!("intent metadata {field} is not a record id")))
}
