use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found: {key}")]
    NotFound { key: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("S3 GetObject error: {0}")]
    GetObject(String),

    #[error("S3 PutObject error: {0}")]
    PutObject(String),

    #[error("S3 DeleteObject error: {0}")]
    DeleteObject(String),

    #[error("S3 ListObjects error: {0}")]
    ListObjects(String),

    #[error("S3 presign error: {0}")]
    Presign(String),
}
