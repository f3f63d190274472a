use async_trait::async_trait;

use super::domain::{App, User};
use super::errors::AuthError;

/// Persists new users. Kept separate from [`UserProvider`] so registration
/// can be exercised against a write-only fake.
#[async_trait]
pub trait UserSaver: Send + Sync {
    /// Single atomic insert; a duplicate email surfaces as
    /// [`AuthError::UserExists`].
    async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, AuthError>;
}

/// Reads user records.
#[async_trait]
pub trait UserProvider: Send + Sync {
    async fn user_by_email(&self, email: &str) -> Result<User, AuthError>;
    async fn user_by_id(&self, id: i64) -> Result<User, AuthError>;
    /// Returns the stored admin flag verbatim; an unknown id is
    /// [`AuthError::UserNotFound`].
    async fn is_admin(&self, user_id: i64) -> Result<bool, AuthError>;
}

/// Resolves app records, including both signing secrets.
#[async_trait]
pub trait AppProvider: Send + Sync {
    async fn app(&self, app_id: i32) -> Result<App, AuthError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockAuthRepository {
        users: Mutex<HashMap<String, User>>, // key: email
        apps: Mutex<HashMap<i32, App>>,      // key: app id
        next_id: AtomicI64,
    }

    impl MockAuthRepository {
        /// Register an app record so logins against its id can succeed.
        pub fn insert_app(&self, app: App) {
            self.apps.lock().unwrap().insert(app.id, app);
        }

        /// Flip the stored admin flag for an existing user.
        pub fn set_admin(&self, user_id: i64, is_admin: bool) {
            let mut users = self.users.lock().unwrap();
            if let Some(user) = users.values_mut().find(|u| u.id == user_id) {
                user.is_admin = is_admin;
            }
        }
    }

    #[async_trait]
    impl UserSaver for MockAuthRepository {
        async fn save_user(&self, email: &str, pass_hash: &str) -> Result<i64, AuthError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(email) {
                return Err(AuthError::UserExists);
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            users.insert(
                email.to_string(),
                User {
                    id,
                    email: email.to_string(),
                    pass_hash: pass_hash.to_string(),
                    is_admin: false,
                },
            );
            Ok(id)
        }
    }

    #[async_trait]
    impl UserProvider for MockAuthRepository {
        async fn user_by_email(&self, email: &str) -> Result<User, AuthError> {
            self.users
                .lock()
                .unwrap()
                .get(email)
                .cloned()
                .ok_or(AuthError::UserNotFound)
        }

        async fn user_by_id(&self, id: i64) -> Result<User, AuthError> {
            self.users
                .lock()
                .unwrap()
                .values()
                .find(|u| u.id == id)
                .cloned()
                .ok_or(AuthError::UserNotFound)
        }

        async fn is_admin(&self, user_id: i64) -> Result<bool, AuthError> {
            self.user_by_id(user_id).await.map(|u| u.is_admin)
        }
    }

    #[async_trait]
    impl AppProvider for MockAuthRepository {
        async fn app(&self, app_id: i32) -> Result<App, AuthError> {
            self.apps
                .lock()
                .unwrap()
                .get(&app_id)
                .cloned()
                .ok_or(AuthError::AppNotFound)
        }
    }
}
