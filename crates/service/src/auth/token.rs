//! Stateless JWT issuance and validation, keyed by per-app secrets.
//!
//! Tokens are compact HS256 JWS structures. Validation is purely
//! cryptographic/structural; it never touches storage, so a token is only
//! ever as trustworthy as the app record the caller resolved.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::domain::{App, TokenPair, User};
use super::errors::AuthError;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub app_id: i32,
    /// Absolute expiry, unix seconds.
    pub exp: i64,
}

/// Mint an access/refresh pair for `user`, scoped to `app`.
///
/// The access token is signed with `app.secret`, the refresh token with
/// `app.refresh_secret`; both carry `exp = now + ttl`.
pub fn new_token_pair(
    user: &User,
    app: &App,
    access_ttl: Duration,
    refresh_ttl: Duration,
) -> Result<TokenPair, AuthError> {
    let now = Utc::now().timestamp();

    let access_claims = Claims {
        user_id: user.id,
        app_id: app.id,
        exp: now + access_ttl.as_secs() as i64,
    };
    let access_token = sign(&access_claims, &app.secret)?;

    let refresh_claims = Claims {
        user_id: user.id,
        app_id: app.id,
        exp: now + refresh_ttl.as_secs() as i64,
    };
    let refresh_token = sign(&refresh_claims, &app.refresh_secret)?;

    Ok(TokenPair { access_token, refresh_token })
}

fn sign(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AuthError::Internal(format!("token signing failed: {e}")))
}

/// Verify `token` against `app`'s access or refresh secret (per
/// `is_refresh`) and return the embedded claims.
///
/// A bad signature, malformed structure, or past expiry all collapse into
/// [`AuthError::TokenInvalid`].
pub fn validate_token(app: &App, token: &str, is_refresh: bool) -> Result<Claims, AuthError> {
    let secret = if is_refresh { &app.refresh_secret } else { &app.secret };

    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    // jsonwebtoken defaults to 60s of leeway; expiry is enforced exactly.
    validation.leeway = 0;

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
        .map_err(|_| AuthError::TokenInvalid)
}
