use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use artsaas_core::models::user::Role;

use crate::error::AuthError;

/// Claims carried in a platform session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformClaims {
    /// The user's record id.
    pub sub: String,
    pub role: Role,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
}

/// The authenticated caller, extracted from validated claims.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: Role,
    pub email: Option<String>,
}

/// Validate a session token against the shared platform secret.
///
/// Checks the HS256 signature and expiry, and requires `sub` to be a valid
/// record id. Unknown roles already fail claim deserialization.
pub fn validate_token(token: &str, secret: &str) -> Result<AuthUser, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<PlatformClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;

    let claims = token_data.claims;
    let id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::InvalidToken(format!("sub is not a record id: {}", claims.sub)))?;

    Ok(AuthUser {
        id,
        role: claims.role,
        email: claims.email,
    })
}
