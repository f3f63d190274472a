use serde::{Deserialize, Serialize};

/// Identity record as seen by the auth workflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Salted Argon2 hash in PHC string form; never exposed to callers.
    pub pass_hash: String,
    pub is_admin: bool,
}

/// Client application record, carrying its per-app signing secrets.
#[derive(Clone, PartialEq, Eq)]
pub struct App {
    pub id: i32,
    pub name: String,
    /// Signs access tokens.
    pub secret: String,
    /// Signs refresh tokens; distinct from `secret` so one token kind can
    /// never verify as the other.
    pub refresh_secret: String,
}

// Secrets stay out of logs, so Debug is written by hand.
impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .finish()
    }
}

/// Access/refresh pair minted on a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
