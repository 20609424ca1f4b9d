pub mod client;
pub mod clock;
pub mod document;
pub mod history;
pub mod position;
pub mod state_machine;
pub mod store;
pub mod trail;

/// Store used when `STORE_URL` is not set.
pub const DEFAULT_STORE_URL: &str = "https://dht11-9aca0-default-rtdb.firebaseio.com";

/// The store base URL from `STORE_URL`, or [`DEFAULT_STORE_URL`].
pub fn store_url_from_env() -> String {
    std::env::var("STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string())
}
