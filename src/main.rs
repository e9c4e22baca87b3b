use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fbgdl::config::Config;
use fbgdl::crawler::Crawler;
use fbgdl::db::Database;
use fbgdl::graph_client::GraphClient;
use fbgdl::storage::UserStorage;

/// Main entry point for the downloader.
///
/// Initializes tracing, parses the command line, makes sure the profile
/// database and its schema exist (fatal if the store is unreadable),
/// resolves the starting uid and runs the crawl.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fbgdl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_args();

    let db = Database::new(&config.db_path)
        .await
        .context("opening profile database")?;
    let storage = UserStorage::new(db.pool.clone());
    storage
        .ensure_schema()
        .await
        .context("opening profile database")?;
    tracing::info!("profile database ready: {}", config.db_path);

    let client = GraphClient::new(&config.graph_base_url)?;
    let crawler = Crawler::new(client, storage, config);

    let start = crawler
        .resolve_start()
        .await
        .context("resolving starting uid")?;
    let total = crawler.run(start).await?;
    tracing::info!("run complete, {} users stored", total);

    Ok(())
}
