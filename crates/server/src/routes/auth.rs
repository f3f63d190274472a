//! Auth endpoints: registration, login, and the admin-flag query.
//!
//! Required-field validation happens here, before the service is invoked;
//! the service assumes well-formed input.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use service::auth::domain::TokenPair;
use service::auth::repo::seaorm::SeaOrmAuthService;

use crate::errors::ApiError;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<SeaOrmAuthService>,
}

#[derive(Debug, Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterOutput {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub app_id: i32,
}

#[derive(Debug, Serialize)]
pub struct IsAdminOutput {
    pub is_admin: bool,
}

fn validate_email(email: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::bad_request("email is required"));
    }
    if !email.contains('@') {
        return Err(ApiError::bad_request("email is not valid"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.is_empty() {
        return Err(ApiError::bad_request("password is required"));
    }
    Ok(())
}

pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<Json<RegisterOutput>, ApiError> {
    validate_email(&input.email)?;
    validate_password(&input.password)?;

    let user_id = state.auth.register_new_user(&input.email, &input.password).await?;
    Ok(Json(RegisterOutput { user_id }))
}

pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<TokenPair>, ApiError> {
    validate_email(&input.email)?;
    validate_password(&input.password)?;
    if input.app_id == 0 {
        return Err(ApiError::bad_request("app_id is required"));
    }

    let pair = state.auth.login(&input.email, &input.password, input.app_id).await?;
    Ok(Json(pair))
}

pub async fn is_admin(
    State(state): State<ServerState>,
    Path(user_id): Path<i64>,
) -> Result<Json<IsAdminOutput>, ApiError> {
    if user_id == 0 {
        return Err(ApiError::bad_request("user_id is required"));
    }

    let is_admin = state.auth.is_admin(user_id).await?;
    Ok(Json(IsAdminOutput { is_admin }))
}
