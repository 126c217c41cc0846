use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// A donation from a donor to an artist, settled through Stripe.
///
/// All money fields are minor currency units (cents).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Donation {
    pub id: Uuid,
    pub donor: Uuid,
    pub artist: Uuid,
    pub amount_cents: i64,
    pub currency: Currency,
    pub donation_type: DonationType,
    pub message: Option<String>,
    pub is_anonymous: bool,
    pub stripe_payment_intent_id: Option<String>,
    pub status: DonationStatus,
    pub platform_fee_cents: i64,
    pub net_amount_cents: i64,
    pub processed_at: Option<jiff::Timestamp>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "UPPERCASE")]
#[ts(export)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
}

impl Currency {
    /// Lowercase ISO code as Stripe expects it.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "usd",
            Currency::Eur => "eur",
            Currency::Gbp => "gbp",
            Currency::Cad => "cad",
            Currency::Aud => "aud",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cad => "C$",
            Currency::Aud => "A$",
        }
    }

    /// Parse an ISO code in either case ("usd" / "USD").
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code.to_ascii_lowercase().as_str() {
            "usd" => Ok(Currency::Usd),
            "eur" => Ok(Currency::Eur),
            "gbp" => Ok(Currency::Gbp),
            "cad" => Ok(Currency::Cad),
            "aud" => Ok(Currency::Aud),
            _ => Err(CoreError::UnknownVariant {
                field: "currency",
                value: code.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DonationType {
    OneTime,
    Monthly,
    ArtworkPurchase,
}

impl DonationType {
    /// Stripe metadata values are bare strings; parse one back.
    pub fn from_metadata(value: &str) -> Result<Self, CoreError> {
        match value {
            "one_time" => Ok(DonationType::OneTime),
            "monthly" => Ok(DonationType::Monthly),
            "artwork_purchase" => Ok(DonationType::ArtworkPurchase),
            _ => Err(CoreError::UnknownVariant {
                field: "donation_type",
                value: value.to_string(),
            }),
        }
    }

    pub fn as_metadata(&self) -> &'static str {
        match self {
            DonationType::OneTime => "one_time",
            DonationType::Monthly => "monthly",
            DonationType::ArtworkPurchase => "artwork_purchase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DonationStatus {
    Pending,
    Completed,
    Failed,
    Refunded,
    Cancelled,
}
