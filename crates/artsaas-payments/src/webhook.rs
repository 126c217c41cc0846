use serde::Deserialize;

use crate::error::PaymentError;

/// A Stripe webhook event, trimmed to the fields the platform reads.
#[derive(Debug, Deserialize)]
pub struct WebhookEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: WebhookData,
}

#[derive(Debug, Deserialize)]
pub struct WebhookData {
    pub object: PaymentIntentObject,
}

/// The PaymentIntent carried inside a webhook event.
#[derive(Debug, Deserialize)]
pub struct PaymentIntentObject {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub metadata: IntentMetadata,
}

/// Metadata attached at intent creation. Stripe stores bare strings, so
/// everything is optional and re-parsed on the way back in.
#[derive(Debug, Default, Deserialize)]
pub struct IntentMetadata {
    #[serde(default)]
    pub donor_id: Option<String>,
    #[serde(default)]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub donation_type: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_anonymous: Option<String>,
}

impl IntentMetadata {
    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous.as_deref() == Some("true")
    }
}

/// What a webhook event means for the donation record.
#[derive(Debug)]
pub enum WebhookOutcome<'a> {
    /// Payment settled; record the donation as completed with the fee split.
    Succeeded(&'a PaymentIntentObject),
    /// Payment failed; record the donation as failed with zero fee and net.
    Failed(&'a PaymentIntentObject),
    /// An event type the platform does not act on.
    Ignored { event_type: &'a str },
}

pub fn parse_event(body: &[u8]) -> Result<WebhookEvent, PaymentError> {
    Ok(serde_json::from_slice(body)?)
}

impl WebhookEvent {
    pub fn outcome(&self) -> WebhookOutcome<'_> {
        match self.event_type.as_str() {
            "payment_intent.succeeded" => WebhookOutcome::Succeeded(&self.data.object),
            "payment_intent.payment_failed" => WebhookOutcome::Failed(&self.data.object),
            other => WebhookOutcome::Ignored { event_type: other },
        }
    }
}
