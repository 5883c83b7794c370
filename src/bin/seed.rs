use migration::{Migrator, MigratorTrait};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use game_review_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("game_review_api={},sea_orm=warn", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db = game_review_api::db::connect(&config.database_url).await?;
    Migrator::up(&db, None).await?;

    tracing::info!("Seeding...");
    game_review_api::seed::run(&db).await?;
    tracing::info!("Done seeding");

    Ok(())
}
