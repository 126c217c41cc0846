//! Session-token validation tests. Tokens are minted locally with the same
//! HS256 primitives the identity provider uses.
//!
//! Run with: `cargo test -p artsaas-auth --test jwt`

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;
use uuid::Uuid;

use artsaas_auth::error::AuthError;
use artsaas_auth::jwt::{validate_token, PlatformClaims};
use artsaas_core::models::user::Role;

const SECRET: &str = "test-platform-secret";

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs()
}

fn mint(claims: &impl serde::Serialize) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("token encodes")
}

#[test]
fn valid_token_yields_auth_user() {
    let id = Uuid::new_v4();
    let now = unix_now();
    let token = mint(&PlatformClaims {
        sub: id.to_string(),
        role: Role::Artist,
        exp: now + 3600,
        iat: now,
        email: Some("artist@example.com".to_string()),
    });

    let user = validate_token(&token, SECRET).expect("token validates");
    assert_eq!(user.id, id);
    assert_eq!(user.role, Role::Artist);
    assert_eq!(user.email.as_deref(), Some("artist@example.com"));
}

#[test]
fn wrong_secret_is_rejected() {
    let now = unix_now();
    let token = mint(&PlatformClaims {
        sub: Uuid::new_v4().to_string(),
        role: Role::Volunteer,
        exp: now + 3600,
        iat: now,
        email: None,
    });

    assert!(matches!(
        validate_token(&token, "a-different-secret"),
        Err(AuthError::Jwt(_))
    ));
}

#[test]
fn expired_token_is_rejected() {
    let now = unix_now();
    let token = mint(&PlatformClaims {
        sub: Uuid::new_v4().to_string(),
        role: Role::Admin,
        exp: now - 600,
        iat: now - 7200,
        email: None,
    });

    assert!(matches!(
        validate_token(&token, SECRET),
        Err(AuthError::Jwt(_))
    ));
}

#[test]
fn non_record_id_sub_is_rejected() {
    let now = unix_now();
    let token = mint(&PlatformClaims {
        sub: "not-a-uuid".to_string(),
        role: Role::Guest,
        exp: now + 3600,
        iat: now,
        email: None,
    });

    assert!(matches!(
        validate_token(&token, SECRET),
        Err(AuthError::InvalidToken(_))
    ));
}

/// Unknown roles must fail claim deserialization rather than mapping to a
/// default.
#[test]
fn unknown_role_is_rejected() {
    let now = unix_now();
    let token = mint(&json!({
        "sub": Uuid::new_v4().to_string(),
        "role": "superuser",
        "exp": now + 3600,
        "iat": now,
    }));

    assert!(matches!(
        validate_token(&token, SECRET),
        Err(AuthError::Jwt(_))
    ));
}
