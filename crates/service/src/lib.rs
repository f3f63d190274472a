//! Business logic for the SSO service.
//! - Centralizes credential verification and token lifecycle under `auth`.
//! - Storage access goes through narrow capability traits so workflows can
//!   be tested against in-memory fakes.

pub mod auth;

pub use auth::AuthService;
