use aws_sdk_s3::Client as S3Client;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub http: reqwest::Client,
    pub jwt_secret: String,
    pub stripe_secret_key: String,
}
