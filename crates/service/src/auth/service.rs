use std::sync::Arc;
use std::time::Duration;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;
use tracing::{info, instrument, warn};

use super::domain::TokenPair;
use super::errors::AuthError;
use super::repository::{AppProvider, UserProvider, UserSaver};
use super::token;

/// Auth service configuration
#[derive(Debug, Clone, Copy)]
pub struct AuthConfig {
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

/// Credential-verification and token-lifecycle engine, independent of the
/// web framework and of the storage backend behind the capability traits.
pub struct AuthService<S: UserSaver, P: UserProvider, A: AppProvider> {
    user_saver: Arc<S>,
    user_provider: Arc<P>,
    app_provider: Arc<A>,
    cfg: AuthConfig,
}

impl<S: UserSaver, P: UserProvider, A: AppProvider> AuthService<S, P, A> {
    pub fn new(user_saver: Arc<S>, user_provider: Arc<P>, app_provider: Arc<A>, cfg: AuthConfig) -> Self {
        Self { user_saver, user_provider, app_provider, cfg }
    }

    /// Authenticate `email`/`password` and mint a token pair scoped to
    /// `app_id`'s secrets.
    ///
    /// An unknown email and a wrong password both come back as
    /// [`AuthError::InvalidCredentials`]; an unknown app propagates as
    /// [`AuthError::AppNotFound`].
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use std::time::Duration;
    /// use service::auth::domain::App;
    /// use service::auth::repository::mock::MockAuthRepository;
    /// use service::auth::service::{AuthConfig, AuthService};
    ///
    /// let repo = Arc::new(MockAuthRepository::default());
    /// repo.insert_app(App { id: 1, name: "web".into(), secret: "a-secret".into(), refresh_secret: "r-secret".into() });
    /// let cfg = AuthConfig { access_ttl: Duration::from_secs(900), refresh_ttl: Duration::from_secs(3600) };
    /// let svc = AuthService::new(repo.clone(), repo.clone(), repo, cfg);
    ///
    /// tokio_test::block_on(svc.register_new_user("alice@example.com", "hunter2")).unwrap();
    /// let pair = tokio_test::block_on(svc.login("alice@example.com", "hunter2", 1)).unwrap();
    /// assert!(!pair.access_token.is_empty());
    /// assert!(!pair.refresh_token.is_empty());
    /// ```
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str, app_id: i32) -> Result<TokenPair, AuthError> {
        info!("attempting to login user");

        let user = match self.user_provider.user_by_email(email).await {
            Ok(user) => user,
            Err(AuthError::UserNotFound) => {
                warn!("user not found");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        let parsed = PasswordHash::new(&user.pass_hash)
            .map_err(|e| AuthError::Internal(format!("stored hash unreadable: {e}")))?;
        if Argon2::default().verify_password(password.as_bytes(), &parsed).is_err() {
            info!("invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let app = self.app_provider.app(app_id).await?;

        let pair = token::new_token_pair(&user, &app, self.cfg.access_ttl, self.cfg.refresh_ttl)?;
        info!(user_id = user.id, "user logged in");
        Ok(pair)
    }

    /// Hash the password and persist a new user, returning its id.
    ///
    /// Hashing is deliberately CPU-bound (Argon2 with a fresh random salt);
    /// persistence is a single atomic insert, so a duplicate email fails
    /// with [`AuthError::UserExists`] and leaves no partial state.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use std::time::Duration;
    /// use service::auth::errors::AuthError;
    /// use service::auth::repository::mock::MockAuthRepository;
    /// use service::auth::service::{AuthConfig, AuthService};
    ///
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let cfg = AuthConfig { access_ttl: Duration::from_secs(900), refresh_ttl: Duration::from_secs(3600) };
    /// let svc = AuthService::new(repo.clone(), repo.clone(), repo, cfg);
    ///
    /// let id = tokio_test::block_on(svc.register_new_user("bob@example.com", "Secret123")).unwrap();
    /// assert!(id > 0);
    /// let again = tokio_test::block_on(svc.register_new_user("bob@example.com", "Secret123"));
    /// assert_eq!(again, Err(AuthError::UserExists));
    /// ```
    #[instrument(skip(self, password))]
    pub async fn register_new_user(&self, email: &str, password: &str) -> Result<i64, AuthError> {
        info!("registering user");

        let salt = SaltString::generate(&mut OsRng);
        let pass_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Internal(format!("password hashing failed: {e}")))?
            .to_string();

        let id = match self.user_saver.save_user(email, &pass_hash).await {
            Ok(id) => id,
            Err(AuthError::UserExists) => {
                warn!("user already exists");
                return Err(AuthError::UserExists);
            }
            Err(e) => return Err(e),
        };

        info!(user_id = id, "user registered");
        Ok(id)
    }

    /// Return the stored admin flag for `user_id`.
    #[instrument(skip(self))]
    pub async fn is_admin(&self, user_id: i64) -> Result<bool, AuthError> {
        let is_admin = self.user_provider.is_admin(user_id).await?;
        info!(is_admin, "checked admin flag");
        Ok(is_admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::App;
    use crate::auth::repository::mock::MockAuthRepository;

    fn test_app() -> App {
        App { id: 1, name: "web".into(), secret: "a-secret".into(), refresh_secret: "r-secret".into() }
    }

    fn service() -> (Arc<MockAuthRepository>, AuthService<MockAuthRepository, MockAuthRepository, MockAuthRepository>) {
        let repo = Arc::new(MockAuthRepository::default());
        repo.insert_app(test_app());
        let cfg = AuthConfig {
            access_ttl: Duration::from_secs(900),
            refresh_ttl: Duration::from_secs(3600),
        };
        (repo.clone(), AuthService::new(repo.clone(), repo.clone(), repo, cfg))
    }

    #[tokio::test]
    async fn login_returns_pair_with_matching_claims() {
        let (_repo, svc) = service();
        let id = svc.register_new_user("alice@example.com", "hunter2").await.unwrap();

        let pair = svc.login("alice@example.com", "hunter2", 1).await.unwrap();

        let access = token::validate_token(&test_app(), &pair.access_token, false).unwrap();
        assert_eq!(access.user_id, id);
        assert_eq!(access.app_id, 1);

        let refresh = token::validate_token(&test_app(), &pair.refresh_token, true).unwrap();
        assert_eq!(refresh.user_id, id);
        assert_eq!(refresh.app_id, 1);
    }

    #[tokio::test]
    async fn concurrent_logins_each_get_their_own_pair() {
        let (_repo, svc) = service();
        svc.register_new_user("alice@example.com", "hunter2").await.unwrap();

        let first = svc.login("alice@example.com", "hunter2", 1).await.unwrap();
        let second = svc.login("alice@example.com", "hunter2", 1).await.unwrap();

        // Stateless issuance: both pairs verify independently.
        assert!(token::validate_token(&test_app(), &first.access_token, false).is_ok());
        assert!(token::validate_token(&test_app(), &second.access_token, false).is_ok());
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let (_repo, svc) = service();
        svc.register_new_user("alice@example.com", "hunter2").await.unwrap();

        let res = svc.login("alice@example.com", "wrong", 1).await;
        assert_eq!(res, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_email_is_indistinguishable_from_wrong_password() {
        let (_repo, svc) = service();

        let res = svc.login("ghost@example.com", "whatever", 1).await;
        assert_eq!(res, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_app_propagates() {
        let (_repo, svc) = service();
        svc.register_new_user("alice@example.com", "hunter2").await.unwrap();

        let res = svc.login("alice@example.com", "hunter2", 99).await;
        assert_eq!(res, Err(AuthError::AppNotFound));
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts_and_first_id_stays_usable() {
        let (_repo, svc) = service();
        let id = svc.register_new_user("alice@example.com", "hunter2").await.unwrap();

        let second = svc.register_new_user("alice@example.com", "hunter2").await;
        assert_eq!(second, Err(AuthError::UserExists));

        // The first registration is intact.
        assert_eq!(svc.is_admin(id).await, Ok(false));
    }

    #[tokio::test]
    async fn is_admin_reflects_stored_flag() {
        let (repo, svc) = service();
        let id = svc.register_new_user("root@example.com", "hunter2").await.unwrap();

        assert_eq!(svc.is_admin(id).await, Ok(false));
        repo.set_admin(id, true);
        assert_eq!(svc.is_admin(id).await, Ok(true));
    }

    #[tokio::test]
    async fn is_admin_for_unknown_user_is_not_found() {
        let (_repo, svc) = service();

        assert_eq!(svc.is_admin(999).await, Err(AuthError::UserNotFound));
    }
}
