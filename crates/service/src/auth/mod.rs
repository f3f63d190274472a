//! Auth module: domain types, storage capability contracts, the token
//! issuer, and the orchestrating service.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;
pub mod token;

pub use service::AuthService;
