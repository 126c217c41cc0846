use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown {field} value: {value}")]
    UnknownVariant { field: &'static str, value: String },

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
