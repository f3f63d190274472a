use sea_orm::DatabaseConnection;

use crate::auth::domain::{App, User};
use crate::auth::errors::AuthError;
use crate::auth::repository::{AppProvider, UserProvider, UserSaver};
use crate::auth::service::AuthService;

/// Sea-ORM implementation of all three storage capability contracts.
pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

/// Auth service wired to the sea-orm repository for every capability.
pub type SeaOrmAuthService =
    AuthService<SeaOrmAuthRepository, SeaOrmAuthRepository, SeaOrmAuthRepository>;

fn to_user(m: models::user::Model) -> User {
    User { id: m.id, email: m.email, pass_hash: m.pass_hash, is_admin: m.is_admin }
}

#[async_trait::async_trait]
impl UserSaver for SeaOrmAuthRepository {
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, AuthError> {
        let created = models::user::create(&self.db, email, pass_hash)
            .await
            .map_err(|e| match e {
                models::errors::ModelError::Conflict(_) => AuthError::UserExists,
                other => AuthError::Internal(other.to_string()),
            })?;
        Ok(created.id)
    }
}

#[async_trait::async_trait]
impl UserProvider for SeaOrmAuthRepository {
    async fn user_by_email(&self, email: &str) -> Result<User, AuthError> {
        models::user::by_email(&self.db, email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .map(to_user)
            .ok_or(AuthError::UserNotFound)
    }

    async fn user_by_id(&self, id: i64) -> Result<User, AuthError> {
        models::user::by_id(&self.db, id)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .map(to_user)
            .ok_or(AuthError::UserNotFound)
    }

    async fn is_admin(&self, user_id: i64) -> Result<bool, AuthError> {
        self.user_by_id(user_id).await.map(|u| u.is_admin)
    }
}

#[async_trait::async_trait]
impl AppProvider for SeaOrmAuthRepository {
    async fn app(&self, app_id: i32) -> Result<App, AuthError> {
        let found = models::app::by_id(&self.db, app_id)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or(AuthError::AppNotFound)?;
        Ok(App {
            id: found.id,
            name: found.name,
            secret: found.secret,
            refresh_secret: found.refresh_secret,
        })
    }
}
