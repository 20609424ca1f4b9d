use anyhow::Result;
use geotrack::client::{LocationSyncClient, SyncClientConfig};
use geotrack::history::DEFAULT_LISTING_LIMIT;
use geotrack::position::{Axis, format_coordinate};
use geotrack::state_machine::sync::SyncState;
use geotrack::store::RestStore;
use geotrack::store_url_from_env;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let url = store_url_from_env();
    let listing_limit = std::env::var("HISTORY_LISTING_LIMIT")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LISTING_LIMIT);

    let config = SyncClientConfig::from_env();
    let store = RestStore::new(&url, config.request_timeout())?;
    let client = LocationSyncClient::new(store, config);

    info!(
        store = %url,
        poll_interval_ms = client.config().poll_period().as_millis() as u64,
        request_timeout_ms = client.config().request_timeout().as_millis() as u64,
        listing_limit,
        "Tracking device"
    );
    let mut snapshots = WatchStream::new(client.subscribe());

    client.start();

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutting down...");
                break;
            }

            next = snapshots.next() => {
                let Some(state) = next else { break };
                if !state.is_loading {
                    report(&state, listing_limit);
                }
            }
        }
    }

    client.dispose();
    Ok(())
}

fn report(state: &SyncState, listing_limit: usize) {
    if let Some(error) = &state.last_error {
        warn!(error = %error, "Showing stale data");
    }

    if !state.position.has_fix() {
        info!("Waiting for first fix");
        return;
    }

    let page = state.history_page(listing_limit);
    let trail_points = state.trail().map_or(0, |trail| trail.path_points.len());

    info!(
        latitude = %format_coordinate(state.position.latitude, Axis::Latitude),
        longitude = %format_coordinate(state.position.longitude, Axis::Longitude),
        gps_active = state.is_active,
        history = page.total,
        trail_points,
        "Location"
    );

    if let Some(latest) = page.entries.first() {
        info!(id = %latest.id, timestamp = latest.timestamp, "Latest history entry");
    }
    if page.is_truncated() {
        info!("Showing latest {} of {} entries", page.entries.len(), page.total);
    }
}
