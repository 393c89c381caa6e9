use feed::FeedClient;
use pocket::PocketClient;
use sync::{Config, Reconciler};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Credentials are validated before any network call is made.
    let config = Config::from_env()?;

    let client = reqwest::Client::new();
    let source = FeedClient::with_client(client.clone());
    let store = PocketClient::new(
        client,
        config.credentials.consumer_key.clone(),
        config.credentials.access_token.clone(),
    );

    let stats = Reconciler::new(config, source, store).run().await;
    tracing::info!(
        "run complete: {} articles saved, {} stale items deleted",
        stats.articles_saved,
        stats.items_deleted
    );

    Ok(())
}
