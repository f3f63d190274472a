use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use tracing::info;

/// Apply or revert schema migrations against the configured database.
///
/// Usage: `migrator [up|down|fresh]` (defaults to `up`). The database URL
/// comes from `DATABASE_URL` / `.env`, same as the server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let action = std::env::args().nth(1).unwrap_or_else(|| "up".to_string());
    let db = models::db::connect().await?;

    match action.as_str() {
        "up" => Migrator::up(&db, None).await?,
        "down" => Migrator::down(&db, None).await?,
        "fresh" => Migrator::fresh(&db).await?,
        other => anyhow::bail!("unknown migrator action: {other} (expected up, down or fresh)"),
    }

    info!(action, "migrations applied");
    Ok(())
}
