use anyhow::Result;
use geotrack::client::{LocationSyncClient, SyncClientConfig};
use geotrack::store::RestStore;
use geotrack::store_url_from_env;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let url = store_url_from_env();
    let config = SyncClientConfig::from_env();

    let store = RestStore::new(&url, config.request_timeout())?;
    let client = LocationSyncClient::new(store, config);

    info!(store = %url, "Clearing location history");
    client.clear_history().await?;

    client.refresh().await?;
    let state = client.snapshot();
    info!(remaining = state.history.len(), "History cleared");

    client.dispose();
    Ok(())
}
