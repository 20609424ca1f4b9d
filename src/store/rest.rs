use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{HISTORY_PATH, LocationStore, ROOT_DOCUMENT_PATH, StoreError};
use crate::document::{self, LocationDocument};
use crate::history::{HistoryEntry, HistoryRecord};

/// Reply to a push into a collection: the id the store generated for the new child.
#[derive(Deserialize)]
struct PushResponse {
    name: String,
}

/// A [`LocationStore`] backed by a realtime-database style REST endpoint, where every resource
/// is addressed as `{base_url}/{path}.json`.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: Client,
    base_url: Url,
}

impl RestStore {
    /// Create a store rooted at `base_url`, bounding every request by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: normalize_base(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, StoreError> {
        Ok(self.base_url.join(path)?)
    }

    async fn get_json(&self, path: &str) -> Result<Value, StoreError> {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");

        let response = self.client.get(url).send().await?;
        let bytes = ensure_success(response, path)?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Parse the base URL, making sure it ends in `/` so relative paths join beneath it.
fn normalize_base(base_url: &str) -> Result<Url, StoreError> {
    let mut url = Url::parse(base_url)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn ensure_success(response: Response, path: &str) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::Status {
            status,
            path: path.to_string(),
        })
    }
}

impl LocationStore for RestStore {
    async fn fetch_document(&self) -> Result<LocationDocument, StoreError> {
        let value = self.get_json(ROOT_DOCUMENT_PATH).await?;
        Ok(LocationDocument::from(value))
    }

    async fn append_history(&self, record: HistoryRecord) -> Result<String, StoreError> {
        let url = self.endpoint(HISTORY_PATH)?;
        debug!(url = %url, "POST");

        let response = self.client.post(url).json(&record).send().await?;
        let bytes = ensure_success(response, HISTORY_PATH)?.bytes().await?;
        let pushed: PushResponse = serde_json::from_slice(&bytes)?;
        Ok(pushed.name)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        let value = self.get_json(HISTORY_PATH).await?;
        Ok(document::parse_history(value))
    }

    async fn clear_history(&self) -> Result<(), StoreError> {
        let url = self.endpoint(HISTORY_PATH)?;
        debug!(url = %url, "DELETE");

        let response = self.client.delete(url).send().await?;
        ensure_success(response, HISTORY_PATH)?;
        Ok(())
    }
}
