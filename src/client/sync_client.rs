use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::client::config::SyncClientConfig;
use crate::client::error::{CycleError, SyncError};
use crate::clock::{Clock, SystemClock};
use crate::state_machine::StateMachine;
use crate::state_machine::sync::{SyncInput, SyncMachine, SyncOutput, SyncState};
use crate::store::{LocationStore, StoreError};

/// Keeps a local view of one device's position and recorded history fresh by polling a
/// [`LocationStore`].
///
/// Every poll cycle:
/// 1. reads the root document; on failure records the error and keeps the stale state;
/// 2. updates the GPS-active flag and, if both coordinates are numbers, the position;
/// 3. when the device is active and its rounded position differs from the last one this client
///    recorded, appends a history entry (best-effort);
/// 4. re-reads the whole history collection and publishes it newest first (best-effort).
///
/// Cycles never overlap. The polling task awaits each cycle before taking the next tick, ticks
/// that fire during a slow cycle are skipped, and [`refresh`](Self::refresh) waits for any
/// running cycle. Each store request is bounded by
/// [`request_timeout`](SyncClientConfig::request_timeout).
///
/// # Example
///
/// ```ignore
/// let store = RestStore::new("https://tracker-demo.firebaseio.com", Duration::from_secs(5))?;
/// let client = LocationSyncClient::new(store, SyncClientConfig::default());
///
/// client.start();
///
/// let mut snapshots = client.subscribe();
/// while snapshots.changed().await.is_ok() {
///     let state = snapshots.borrow_and_update().clone();
///     println!("{:?} active={}", state.position, state.is_active);
/// }
/// ```
pub struct LocationSyncClient<S, C = SystemClock> {
    shared: Arc<Shared<S, C>>,
    poller: Mutex<PollerState>,
}

struct Shared<S, C> {
    store: S,
    clock: C,
    config: SyncClientConfig,
    machine: Mutex<SyncMachine>,
    cycle: tokio::sync::Mutex<()>,
    snapshots: watch::Sender<SyncState>,
}

enum PollerState {
    Idle,
    Running { shutdown: watch::Sender<bool> },
    Disposed,
}

impl<S: LocationStore> LocationSyncClient<S, SystemClock> {
    /// Create a client reading wall-clock time from the system.
    pub fn new(store: S, config: SyncClientConfig) -> Self {
        Self::with_clock(store, SystemClock, config)
    }
}

impl<S: LocationStore, C: Clock> LocationSyncClient<S, C> {
    /// Create a client with an injected clock. Polling does not begin until [`start`](Self::start).
    pub fn with_clock(store: S, clock: C, config: SyncClientConfig) -> Self {
        let (snapshots, _) = watch::channel(SyncState::default());

        Self {
            shared: Arc::new(Shared {
                store,
                clock,
                config,
                machine: Mutex::new(SyncMachine::new()),
                cycle: tokio::sync::Mutex::new(()),
                snapshots,
            }),
            poller: Mutex::new(PollerState::Idle),
        }
    }

    /// Begin polling: one cycle immediately, then one every
    /// [`poll_interval`](SyncClientConfig::poll_interval).
    ///
    /// Does nothing if already polling or disposed. Must be called within a tokio runtime.
    pub fn start(&self) {
        let mut poller = self.lock_poller();
        if !matches!(*poller, PollerState::Idle) {
            return;
        }

        let (shutdown, shutdown_rx) = watch::channel(false);
        tokio::spawn(Arc::clone(&self.shared).poll_loop(shutdown_rx));

        *poller = PollerState::Running { shutdown };
    }

    /// Stop polling. A cycle already in flight runs to completion; no further cycle starts.
    ///
    /// Polling may be resumed with [`start`](Self::start).
    pub fn stop(&self) {
        let mut poller = self.lock_poller();
        if let PollerState::Running { shutdown } = &*poller {
            shutdown.send_replace(true);
            *poller = PollerState::Idle;
        }
    }

    /// Stop polling for good. Safe to call any number of times.
    pub fn dispose(&self) {
        self.stop();
        *self.lock_poller() = PollerState::Disposed;
    }

    pub fn is_running(&self) -> bool {
        matches!(*self.lock_poller(), PollerState::Running { .. })
    }

    /// Run one poll cycle now, after any cycle already in flight.
    ///
    /// Fails only when the root document could not be read; history failures are logged and
    /// leave the previously published history in place.
    pub async fn refresh(&self) -> Result<(), SyncError> {
        self.shared.run_cycle().await
    }

    /// Delete the entire remote history collection.
    ///
    /// The published history is not touched; call [`refresh`](Self::refresh) afterwards to pick
    /// up the emptied collection.
    pub async fn clear_history(&self) -> Result<(), SyncError> {
        let _cycle = self.shared.cycle.lock().await;

        self.shared
            .bounded(self.shared.store.clear_history())
            .await
            .map_err(SyncError::ClearHistory)?;

        info!("History cleared");
        Ok(())
    }

    /// The most recently published state.
    pub fn snapshot(&self) -> SyncState {
        self.shared.snapshots.borrow().clone()
    }

    /// Subscribe to published state. A new value is sent whenever the state changes.
    pub fn subscribe(&self) -> watch::Receiver<SyncState> {
        self.shared.snapshots.subscribe()
    }

    pub fn config(&self) -> &SyncClientConfig {
        &self.shared.config
    }

    fn lock_poller(&self) -> std::sync::MutexGuard<'_, PollerState> {
        self.poller.lock().expect("poller lock poisoned")
    }
}

impl<S, C> Drop for LocationSyncClient<S, C> {
    fn drop(&mut self) {
        if let Ok(PollerState::Running { shutdown }) = self.poller.get_mut() {
            shutdown.send_replace(true);
        }
    }
}

impl<S: LocationStore, C: Clock> Shared<S, C> {
    async fn poll_loop(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) {
        let period = self.config.poll_period();
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(interval_ms = period.as_millis() as u64, "Polling started");

        loop {
            tokio::select! {
                biased;

                _ = shutdown.changed() => break,

                _ = ticker.tick() => {
                    // Failures are already logged and recorded in the published state.
                    let _ = self.run_cycle().await;
                }
            }
        }

        info!("Polling stopped");
    }

    async fn run_cycle(&self) -> Result<(), SyncError> {
        let _cycle = self.cycle.lock().await;

        debug!("Poll cycle started");
        self.apply(SyncInput::CycleStarted);
        let finished = CycleGuard { shared: self };

        let result = self.poll_store().await;

        drop(finished);
        debug!(ok = result.is_ok(), "Poll cycle finished");

        result
    }

    async fn poll_store(&self) -> Result<(), SyncError> {
        let document = match self.bounded(self.store.fetch_document()).await {
            Ok(document) => document,
            Err(e) => {
                let error = SyncError::Fetch(e);
                warn!(error = %error.store_error(), "Location fetch failed");
                self.apply(SyncInput::DocumentFetchFailed(CycleError::from(&error)));
                return Err(error);
            }
        };

        let now = self.clock.now();
        self.apply(SyncInput::DocumentFetched { document, now });

        while let Some(SyncOutput::AppendHistory(record)) = self.poll() {
            match self.bounded(self.store.append_history(record)).await {
                Ok(id) => {
                    info!(
                        id = %id,
                        key = %record.key(),
                        timestamp = record.timestamp,
                        "Position recorded"
                    );
                    self.apply(SyncInput::HistoryAppended(record));
                }
                Err(e) => {
                    let error = SyncError::HistoryWrite(e);
                    warn!(error = %error.store_error(), key = %record.key(), "{error}");
                }
            }
        }

        match self.bounded(self.store.fetch_history()).await {
            Ok(entries) => {
                debug!(count = entries.len(), "History fetched");
                self.apply(SyncInput::HistoryFetched(entries));
            }
            Err(e) => {
                let error = SyncError::HistoryRead(e);
                warn!(error = %error.store_error(), "{error}");
            }
        }

        Ok(())
    }

    async fn bounded<T>(
        &self,
        request: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, StoreError> {
        tokio::time::timeout(self.config.request_timeout(), request).await?
    }
}

impl<S, C> Shared<S, C> {
    fn apply(&self, input: SyncInput) {
        let mut machine = self.machine.lock().expect("sync machine lock poisoned");
        machine.process_input(input);

        let state = machine.state();
        self.snapshots.send_if_modified(|published| {
            if *published == *state {
                false
            } else {
                published.clone_from(state);
                true
            }
        });
    }

    fn poll(&self) -> Option<SyncOutput> {
        self.machine
            .lock()
            .expect("sync machine lock poisoned")
            .poll_output()
    }
}

/// Marks the running cycle finished when dropped, including when the cycle's future is
/// cancelled part way through.
struct CycleGuard<'a, S, C> {
    shared: &'a Shared<S, C>,
}

impl<S, C> Drop for CycleGuard<'_, S, C> {
    fn drop(&mut self) {
        self.shared.apply(SyncInput::CycleFinished);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::client::config::DEFAULT_POLL_INTERVAL;
    use crate::client::error::ErrorKind;
    use crate::clock::ManualClock;
    use crate::document::LocationDocument;
    use crate::history::{HistoryEntry, HistoryRecord};
    use crate::position::Position;
    use crate::store::MemoryStore;

    type TestClient = LocationSyncClient<Arc<MemoryStore>, Arc<ManualClock>>;

    fn setup(document: serde_json::Value) -> (TestClient, Arc<MemoryStore>, Arc<ManualClock>) {
        let store = Arc::new(MemoryStore::with_document(document));
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let client = LocationSyncClient::with_clock(
            Arc::clone(&store),
            Arc::clone(&clock),
            SyncClientConfig::default(),
        );
        (client, store, clock)
    }

    fn active_at(latitude: f64, longitude: f64) -> serde_json::Value {
        json!({ "latitude": latitude, "longitude": longitude, "active": 1 })
    }

    #[tokio::test]
    async fn test_active_device_first_cycle() {
        let (client, store, _) = setup(json!({
            "latitude": 12.97100,
            "longitude": 77.59500,
            "active": 1,
        }));

        client.refresh().await.unwrap();

        let state = client.snapshot();
        assert_eq!(state.position, Position::new(12.971, 77.595));
        assert!(state.is_active);
        assert_eq!(state.history.len(), 1);
        assert_eq!(store.appends(), 1);
        assert_eq!(
            state.last_saved_key.map(|k| k.to_string()).as_deref(),
            Some("12.97100,77.59500")
        );
        assert_eq!(state.last_updated, Some(1_700_000_000_000));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_inactive_device_updates_position_only() {
        let (client, store, _) = setup(json!({
            "latitude": 12.97100,
            "longitude": 77.59500,
            "active": 0,
        }));

        client.refresh().await.unwrap();

        let state = client.snapshot();
        assert!(!state.is_active);
        assert_eq!(state.position, Position::new(12.971, 77.595));
        assert_eq!(store.appends(), 0);
        assert!(state.history.is_empty());
    }

    #[tokio::test]
    async fn test_missing_active_flag_is_inactive() {
        let (client, store, _) = setup(json!({ "latitude": 1.5, "longitude": 2.5 }));

        client.refresh().await.unwrap();

        assert!(!client.snapshot().is_active);
        assert_eq!(store.appends(), 0);
    }

    #[tokio::test]
    async fn test_double_refresh_is_idempotent() {
        let (client, store, _) = setup(active_at(12.971, 77.595));

        client.refresh().await.unwrap();
        let first = client.snapshot();
        client.refresh().await.unwrap();
        let second = client.snapshot();

        assert_eq!(first.position, second.position);
        assert_eq!(first.is_active, second.is_active);
        assert_eq!(store.appends(), 1);
        assert_eq!(second.history.len(), 1);
    }

    #[tokio::test]
    async fn test_movement_records_one_entry_per_change() {
        let (client, store, clock) = setup(active_at(12.971, 77.595));

        client.refresh().await.unwrap();
        clock.advance(5_000);
        store.set_document(active_at(12.972, 77.595));
        client.refresh().await.unwrap();
        clock.advance(5_000);
        client.refresh().await.unwrap();

        assert_eq!(store.appends(), 2);

        let mut timestamps: Vec<_> = store
            .history_records()
            .iter()
            .map(|record| record.timestamp)
            .collect();
        timestamps.sort_unstable();
        assert_eq!(timestamps, [1_700_000_000_000, 1_700_000_005_000]);

        let history = client.snapshot().history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].position(), Position::new(12.972, 77.595));
        assert!(history[0].timestamp >= history[1].timestamp);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_stale_state() {
        let (client, store, _) = setup(active_at(1.0, 2.0));
        client.refresh().await.unwrap();

        store.fail_document(true);
        store.set_document(active_at(3.0, 4.0));
        let err = client.refresh().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Fetch);
        let state = client.snapshot();
        assert_eq!(state.position, Position::new(1.0, 2.0));
        assert!(state.is_active);
        assert_eq!(state.last_error.as_ref().map(|e| e.kind), Some(ErrorKind::Fetch));

        store.fail_document(false);
        client.refresh().await.unwrap();
        let state = client.snapshot();
        assert!(state.last_error.is_none());
        assert_eq!(state.position, Position::new(3.0, 4.0));
    }

    #[tokio::test]
    async fn test_history_write_failure_is_swallowed_and_retried() {
        let (client, store, _) = setup(active_at(1.0, 2.0));

        store.fail_append(true);
        client.refresh().await.unwrap();
        assert_eq!(store.history_len(), 0);
        assert!(client.snapshot().last_saved_key.is_none());
        assert!(client.snapshot().last_error.is_none());

        store.fail_append(false);
        client.refresh().await.unwrap();
        assert_eq!(store.history_len(), 1);
    }

    #[tokio::test]
    async fn test_history_read_failure_keeps_published_history() {
        let (client, store, _) = setup(active_at(1.0, 2.0));
        client.refresh().await.unwrap();

        store.fail_history_fetch(true);
        store.set_document(active_at(5.0, 6.0));
        client.refresh().await.unwrap();

        assert_eq!(store.history_len(), 2);
        assert_eq!(client.snapshot().history.len(), 1);
        assert_eq!(client.snapshot().position, Position::new(5.0, 6.0));
    }

    #[tokio::test]
    async fn test_history_written_elsewhere_is_published() {
        let (client, store, _) = setup(json!({
            "latitude": 1.0,
            "longitude": 2.0,
            "active": 0,
        }));
        store.insert_history("older", HistoryRecord::new(Position::new(0.5, 0.5), 10));
        store.insert_history("newer", HistoryRecord::new(Position::new(0.7, 0.7), 20));

        client.refresh().await.unwrap();

        let ids: Vec<_> = client
            .snapshot()
            .history
            .iter()
            .map(|entry| entry.id.clone())
            .collect();
        assert_eq!(ids, ["newer", "older"]);
        assert!(client.snapshot().last_saved_key.is_none());
    }

    #[tokio::test]
    async fn test_clear_then_refresh_empties_history() {
        let (client, store, _) = setup(active_at(1.0, 2.0));
        client.refresh().await.unwrap();
        assert_eq!(client.snapshot().history.len(), 1);

        client.clear_history().await.unwrap();
        // Published state is untouched until the next cycle.
        assert_eq!(client.snapshot().history.len(), 1);

        client.refresh().await.unwrap();
        assert!(client.snapshot().history.is_empty());
        // Same rounded position as the last write, so nothing is re-recorded.
        assert_eq!(store.appends(), 1);
    }

    #[tokio::test]
    async fn test_clear_failure_is_reported() {
        let (client, store, _) = setup(active_at(1.0, 2.0));
        client.refresh().await.unwrap();

        store.fail_clear(true);
        let err = client.clear_history().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ClearHistory);
        assert_eq!(client.snapshot().history.len(), 1);
        assert_eq!(store.history_len(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let (client, _, _) = setup(active_at(1.0, 2.0));
        let mut snapshots = client.subscribe();

        client.refresh().await.unwrap();

        assert!(snapshots.has_changed().unwrap());
        let state = snapshots.borrow_and_update().clone();
        assert_eq!(state.position, Position::new(1.0, 2.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_on_interval_until_disposed() {
        let (client, store, _) = setup(active_at(1.0, 2.0));

        client.start();
        assert!(client.is_running());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(store.document_fetches(), 1);

        tokio::time::sleep(Duration::from_millis(5_000)).await;
        assert_eq!(store.document_fetches(), 2);

        client.dispose();
        client.dispose();
        assert!(!client.is_running());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(store.document_fetches(), 2);

        // A disposed client cannot be restarted.
        client.start();
        assert!(!client.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_then_restart() {
        let (client, store, _) = setup(active_at(1.0, 2.0));

        client.start();
        client.start();
        tokio::time::sleep(Duration::from_millis(10)).await;
        client.stop();
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(store.document_fetches(), 1);

        client.start();
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(store.document_fetches(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_polling_continues_after_failures() {
        let (client, store, _) = setup(active_at(1.0, 2.0));
        store.fail_document(true);

        client.start();
        tokio::time::sleep(Duration::from_millis(15_010)).await;

        assert_eq!(store.document_fetches(), 4);
        assert_eq!(
            client.snapshot().last_error.map(|e| e.kind),
            Some(ErrorKind::Fetch)
        );
    }

    /// A store whose root document never arrives.
    struct StalledStore;

    impl LocationStore for StalledStore {
        async fn fetch_document(&self) -> Result<LocationDocument, StoreError> {
            std::future::pending().await
        }

        async fn append_history(&self, _record: HistoryRecord) -> Result<String, StoreError> {
            std::future::pending().await
        }

        async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
            std::future::pending().await
        }

        async fn clear_history(&self) -> Result<(), StoreError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_are_bounded_by_timeout() {
        let config = SyncClientConfig::builder()
            .request_timeout(Duration::from_secs(2))
            .build();
        let client = LocationSyncClient::with_clock(StalledStore, ManualClock::new(0), config);

        let err = client.refresh().await.unwrap_err();
        assert!(matches!(err, SyncError::Fetch(StoreError::Timeout(_))));

        let err = client.clear_history().await.unwrap_err();
        assert!(matches!(err, SyncError::ClearHistory(StoreError::Timeout(_))));
    }

    /// A [`MemoryStore`] whose root document reads take a scripted amount of time.
    struct SlowStore {
        inner: MemoryStore,
        delays: Mutex<VecDeque<Duration>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl SlowStore {
        /// Each document read takes the next delay in `delays_ms`; later reads are instant.
        fn new(document: serde_json::Value, delays_ms: &[u64]) -> Self {
            Self {
                inner: MemoryStore::with_document(document),
                delays: Mutex::new(delays_ms.iter().copied().map(Duration::from_millis).collect()),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }

        fn max_in_flight(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }
    }

    impl LocationStore for SlowStore {
        async fn fetch_document(&self) -> Result<LocationDocument, StoreError> {
            let delay = self.delays.lock().unwrap().pop_front();

            let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            self.inner.fetch_document().await
        }

        async fn append_history(&self, record: HistoryRecord) -> Result<String, StoreError> {
            self.inner.append_history(record).await
        }

        async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, StoreError> {
            self.inner.fetch_history().await
        }

        async fn clear_history(&self) -> Result<(), StoreError> {
            self.inner.clear_history().await
        }
    }

    fn slow_client(
        store: &Arc<SlowStore>,
        poll_interval: Duration,
    ) -> LocationSyncClient<Arc<SlowStore>, ManualClock> {
        let config = SyncClientConfig::builder()
            .poll_interval(poll_interval)
            .request_timeout(Duration::from_secs(10))
            .build();
        LocationSyncClient::with_clock(Arc::clone(store), ManualClock::new(0), config)
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_refresh_clears_loading() {
        let store = Arc::new(SlowStore::new(active_at(1.0, 2.0), &[4_000]));
        let client = slow_client(&store, DEFAULT_POLL_INTERVAL);

        let cancelled = tokio::time::timeout(Duration::from_millis(100), client.refresh()).await;
        assert!(cancelled.is_err());
        assert!(!client.snapshot().is_loading);

        // The cycle lock was released with the dropped future.
        client.refresh().await.unwrap();
        let state = client.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.history.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_cycle_skips_missed_ticks() {
        let store = Arc::new(SlowStore::new(active_at(1.0, 2.0), &[4_500]));
        let client = slow_client(&store, Duration::from_secs(1));

        client.start();

        // The first cycle ends at 4.5s. The ticks missed meanwhile collapse into one
        // immediate cycle, and the schedule resumes on the next whole second.
        tokio::time::sleep(Duration::from_millis(4_600)).await;
        assert_eq!(store.inner.document_fetches(), 2);

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(store.inner.document_fetches(), 4);
        assert_eq!(store.max_in_flight(), 1);
        assert_eq!(store.inner.appends(), 1);

        client.dispose();
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_waits_for_running_cycle() {
        let store = Arc::new(SlowStore::new(active_at(1.0, 2.0), &[4_000, 4_000]));
        let client = slow_client(&store, Duration::from_secs(10));
        let started = tokio::time::Instant::now();

        client.start();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(client.snapshot().is_loading);

        client.refresh().await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(8));
        assert_eq!(store.max_in_flight(), 1);
        assert_eq!(store.inner.document_fetches(), 2);
        assert_eq!(store.inner.appends(), 1);
        assert!(!client.snapshot().is_loading);

        client.dispose();
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_lets_running_cycle_finish() {
        let store = Arc::new(SlowStore::new(active_at(1.0, 2.0), &[3_000]));
        let client = slow_client(&store, Duration::from_secs(1));

        client.start();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(client.snapshot().is_loading);

        client.stop();
        assert!(!client.is_running());

        tokio::time::sleep(Duration::from_secs(10)).await;

        let state = client.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.position, Position::new(1.0, 2.0));
        assert_eq!(state.history.len(), 1);
        assert_eq!(store.inner.document_fetches(), 1);
        assert_eq!(client.config().poll_period(), Duration::from_secs(1));
    }
}
