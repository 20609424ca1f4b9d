//! The location sync client and its supporting types.
//!
//! [`LocationSyncClient`] owns the polling loop against a [`LocationStore`](crate::store::LocationStore)
//! and publishes a [`SyncState`](crate::state_machine::sync::SyncState) snapshot after every
//! change. Presentation code reads snapshots and drives the client through
//! [`refresh`](LocationSyncClient::refresh), [`clear_history`](LocationSyncClient::clear_history)
//! and [`dispose`](LocationSyncClient::dispose).
//!
//! # Example
//!
//! ```ignore
//! use geotrack::client::{LocationSyncClient, SyncClientConfig};
//! use geotrack::store::RestStore;
//!
//! let config = SyncClientConfig::builder()
//!     .poll_interval(Duration::from_secs(5))
//!     .build();
//! let store = RestStore::new(&store_url, config.request_timeout())?;
//!
//! let client = LocationSyncClient::new(store, config);
//! client.start();
//!
//! // User-initiated retry
//! client.refresh().await?;
//!
//! // Wipe the recorded trail, then repopulate from the emptied store
//! client.clear_history().await?;
//! client.refresh().await?;
//!
//! client.dispose();
//! ```

mod config;
pub mod error;
mod sync_client;

pub use config::{DEFAULT_POLL_INTERVAL, SyncClientConfig};
pub use error::{CycleError, ErrorKind, SyncError};
pub use sync_client::LocationSyncClient;
