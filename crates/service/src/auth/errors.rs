use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email and wrong password are deliberately merged so callers
    /// cannot probe which accounts exist.
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user already exists")]
    UserExists,
    #[error("user not found")]
    UserNotFound,
    #[error("app not found")]
    AppNotFound,
    /// Bad signature, malformed structure, or expired token.
    #[error("invalid token")]
    TokenInvalid,
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::InvalidCredentials => 1001,
            AuthError::UserExists => 1002,
            AuthError::UserNotFound => 1003,
            AuthError::AppNotFound => 1004,
            AuthError::TokenInvalid => 1101,
            AuthError::Internal(_) => 1200,
        }
    }
}
