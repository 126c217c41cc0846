use serde::Deserialize;
use uuid::Uuid;

use artsaas_core::models::donation::{Currency, DonationType};

use crate::currency;
use crate::error::PaymentError;

const PAYMENT_INTENTS_URL: &str = "https://api.stripe.com/v1/payment_intents";

/// Everything needed to open a PaymentIntent for a donation.
#[derive(Debug, Clone)]
pub struct CreatePaymentIntentParams {
    pub amount_cents: i64,
    pub currency: Currency,
    pub donor_id: Uuid,
    pub artist_id: Uuid,
    pub donation_type: DonationType,
    pub message: Option<String>,
    pub is_anonymous: bool,
}

/// The subset of Stripe's PaymentIntent the platform keeps.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIntent {
    pub id: String,
    /// Handed to the frontend to confirm the payment.
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Default, Deserialize)]
struct StripeErrorBody {
    #[serde(default)]
    error: Option<StripeErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Create a Stripe PaymentIntent for a donation.
///
/// Currency support and the per-currency minimum are checked before any
/// network call. Donor, artist, type, message, and anonymity ride along as
/// metadata so the webhook can rebuild the donation without a lookup.
pub async fn create_payment_intent(
    http: &reqwest::Client,
    secret_key: &str,
    params: &CreatePaymentIntentParams,
) -> Result<CreatedIntent, PaymentError> {
    currency::check_minimum(params.currency, params.amount_cents)?;

    let form = [
        ("amount", params.amount_cents.to_string()),
        ("currency", params.currency.code().to_string()),
        (
            "description",
            format!("Donation to artist {}", params.artist_id),
        ),
        ("automatic_payment_methods[enabled]", "true".to_string()),
        ("metadata[donor_id]", params.donor_id.to_string()),
        ("metadata[artist_id]", params.artist_id.to_string()),
        (
            "metadata[donation_type]",
            params.donation_type.as_metadata().to_string(),
        ),
        (
            "metadata[message]",
            params.message.clone().unwrap_or_default(),
        ),
        ("metadata[is_anonymous]", params.is_anonymous.to_string()),
    ];

    let resp = http
        .post(PAYMENT_INTENTS_URL)
        .bearer_auth(secret_key)
        .form(&form)
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<StripeErrorBody>(&text)
            .ok()
            .and_then(|body| body.error)
            .and_then(|detail| detail.message)
            .unwrap_or(text);
        tracing::warn!(status = status.as_u16(), %message, "payment intent rejected");
        return Err(PaymentError::Stripe {
            status: status.as_u16(),
            message,
        });
    }

    Ok(resp.json::<CreatedIntent>().await?)
}
