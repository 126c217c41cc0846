use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("minimum donation for {currency} is {minimum_cents} minor units")]
    BelowMinimum {
        currency: &'static str,
        minimum_cents: i64,
    },

    #[error("stripe error ({status}): {message}")]
    Stripe { status: u16, message: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
