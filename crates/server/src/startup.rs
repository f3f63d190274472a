use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth};
use service::auth::repo::seaorm::{SeaOrmAuthRepository, SeaOrmAuthService};
use service::auth::service::{AuthConfig, AuthService};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load host/port from configs or env vars, with sensible fallbacks
fn load_bind_addr(cfg: Option<&configs::AppConfig>) -> anyhow::Result<SocketAddr> {
    let (host, port) = match cfg {
        Some(cfg) => (cfg.server.host.clone(), cfg.server.port),
        None => {
            let host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            let port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            (host, port)
        }
    };
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    // Config file is optional; env vars cover the gaps.
    let cfg = configs::AppConfig::load_and_validate().ok();

    let db = match cfg.as_ref() {
        Some(cfg) => models::db::connect_configured(&cfg.database).await?,
        None => models::db::connect().await?,
    };

    let tokens = cfg.as_ref().map(|c| c.tokens.clone()).unwrap_or_default();
    let auth_cfg = AuthConfig {
        access_ttl: Duration::from_secs(tokens.access_ttl_secs),
        refresh_ttl: Duration::from_secs(tokens.refresh_ttl_secs),
    };

    let repo = Arc::new(SeaOrmAuthRepository { db });
    let auth_svc: Arc<SeaOrmAuthService> =
        Arc::new(AuthService::new(repo.clone(), repo.clone(), repo, auth_cfg));
    let state = auth::ServerState { auth: auth_svc };

    let app: Router = routes::build_router(build_cors(), state);

    let addr = load_bind_addr(cfg.as_ref())?;
    info!(%addr, "starting sso server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
