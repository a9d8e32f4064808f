//! Search controller: the query/select API consumed by a UI layer.
//!
//! The controller owns the loaded collection, its index, the history store,
//! and the session sample, and decides what the dropdown shows:
//!
//! - **Searching** (non-empty query): matcher results, up to the result limit
//! - **Suggesting** (empty query, open): recent selections if any, otherwise a
//!   random sample drawn once per collection load
//! - **Idle** (closed): nothing
//!
//! # Error Handling Strategy
//!
//! Nothing here fails the host application. A failed load is logged and leaves
//! an empty collection; a failed history write is logged and the in-memory
//! history stays current. Loads are not retried automatically.

mod loader;
mod selection;
mod state;

use std::sync::Arc;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use self::loader::{LoadResult, PendingLoad, PollOutcome};
pub use self::selection::{SelectionOutcome, SelectionSink};
pub use self::state::SearchState;
use crate::config::SearchConfig;
use crate::history::HistoryStore;
use crate::indexer::Indexer;
use crate::models::{IndexedRecord, Record, RecordId};
use crate::search::{count_matches, search};
use crate::source::RecordSource;
use crate::storage::KeyValueStore;
use crate::utils::detail_path;

/// Progress of the most recent collection load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load in flight
    Idle,
    /// A background load has not finished yet
    Pending,
    /// A load finished with this many records
    Loaded(usize),
    /// A load failed; the collection is empty
    Failed,
}

pub struct SearchController {
    config: SearchConfig,
    records: Arc<Vec<Record>>,
    indexer: Indexer,
    index: Arc<Vec<IndexedRecord>>,
    history: HistoryStore,
    sample: Vec<usize>,
    rng: StdRng,
    query: String,
    open: bool,
    sink: Option<Box<dyn SelectionSink>>,
    pending: Option<PendingLoad>,
    generation: u64,
    disposed: bool,
    last_load_error: Option<String>,
}

impl SearchController {
    /// Create a controller with an empty collection, loading history from `store`
    pub fn new(config: SearchConfig, store: Box<dyn KeyValueStore>) -> Self {
        let history = HistoryStore::load(store, &config.history_key, config.history_capacity);
        let indexer = Indexer::new(config.fields.clone());

        Self {
            config,
            records: Arc::new(Vec::new()),
            indexer,
            index: Arc::new(Vec::new()),
            history,
            sample: Vec::new(),
            rng: StdRng::from_os_rng(),
            query: String::new(),
            open: false,
            sink: None,
            pending: None,
            generation: 0,
            disposed: false,
            last_load_error: None,
        }
    }

    /// Use a deterministic sample for the rest of the session
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Attach the collaborator notified on selection
    pub fn with_sink(mut self, sink: impl SelectionSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Fetch the collection synchronously from `source`
    pub fn load(&mut self, source: &dyn RecordSource) -> LoadStatus {
        if self.disposed {
            debug!("ignoring load on disposed controller");
            return LoadStatus::Idle;
        }
        // A synchronous load supersedes anything in flight
        self.pending = None;
        self.generation += 1;

        debug!(source = %source.describe(), "loading records");
        let result = source.fetch_page(self.config.page, self.config.page_size);
        self.apply_load(result)
    }

    /// Start fetching the collection on a background thread.
    ///
    /// Any earlier load still in flight is abandoned; its result will be
    /// ignored. Call [`poll_load`](Self::poll_load) to apply the result.
    pub fn spawn_load<S>(&mut self, source: S)
    where
        S: RecordSource + Send + 'static,
    {
        if self.disposed {
            debug!("ignoring load on disposed controller");
            return;
        }
        self.generation += 1;
        debug!(source = %source.describe(), generation = self.generation, "spawning record load");
        self.pending = Some(PendingLoad::spawn(
            source,
            self.config.page,
            self.config.page_size,
            self.generation,
        ));
    }

    /// Apply the background load's result if it has arrived
    pub fn poll_load(&mut self) -> LoadStatus {
        let Some(pending) = self.pending.as_ref() else {
            return LoadStatus::Idle;
        };
        match pending.poll() {
            PollOutcome::Pending => LoadStatus::Pending,
            outcome => {
                let generation = pending.generation();
                self.pending = None;
                self.finish_background(generation, outcome)
            }
        }
    }

    /// Block until the background load finishes and apply it
    pub fn wait_for_load(&mut self) -> LoadStatus {
        match self.pending.take() {
            Some(pending) => {
                let generation = pending.generation();
                self.finish_background(generation, pending.wait())
            }
            None => LoadStatus::Idle,
        }
    }

    fn finish_background(&mut self, generation: u64, outcome: PollOutcome) -> LoadStatus {
        if self.disposed || generation != self.generation {
            debug!(generation, "ignoring stale load result");
            return LoadStatus::Idle;
        }
        match outcome {
            PollOutcome::Ready(result) => self.apply_load(result),
            PollOutcome::Lost => {
                warn!(generation, "record load worker exited without a result");
                self.last_load_error = Some("record load worker exited".to_string());
                self.set_records(Vec::new());
                LoadStatus::Failed
            }
            PollOutcome::Pending => LoadStatus::Pending,
        }
    }

    fn apply_load(&mut self, result: LoadResult) -> LoadStatus {
        match result {
            Ok(records) => {
                let count = records.len();
                info!(records = count, "loaded searchable records");
                self.last_load_error = None;
                self.set_records(records);
                LoadStatus::Loaded(count)
            }
            Err(e) => {
                warn!(error = %e, "failed to load records, search will have no options");
                self.last_load_error = Some(e.to_string());
                self.set_records(Vec::new());
                LoadStatus::Failed
            }
        }
    }

    /// Replace the collection, rebuilding the index and the suggestion sample
    pub fn set_records(&mut self, records: Vec<Record>) {
        self.records = Arc::new(records);
        self.index = self.indexer.index_for(&self.records);

        let amount = self.config.suggestion_limit.min(self.records.len());
        self.sample = rand::seq::index::sample(&mut self.rng, self.records.len(), amount).into_vec();
    }

    /// Stop accepting load results; pending background loads are abandoned
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.pending = None;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Message of the last failed load, cleared by the next successful one
    pub fn last_load_error(&self) -> Option<&str> {
        self.last_load_error.as_deref()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of index builds so far (one per distinct collection)
    pub fn index_builds(&self) -> usize {
        self.indexer.builds()
    }

    // ---------------------------------------------------------------------
    // Query state
    // ---------------------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> SearchState {
        SearchState::for_query(&self.query, self.open)
    }

    /// Open the dropdown for the current query
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dropdown; the query is kept
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Replace the query text. Non-blank text opens the dropdown.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        if !self.query.trim().is_empty() {
            self.open = true;
        }
    }

    /// What the dropdown shows in the current state
    pub fn options(&self) -> Vec<&Record> {
        match self.state() {
            SearchState::Idle => Vec::new(),
            SearchState::Suggesting => self.suggestions(),
            SearchState::Searching => self.results(),
        }
    }

    /// Matcher results for the current query
    pub fn results(&self) -> Vec<&Record> {
        search(&self.index, &self.query, self.config.result_limit)
    }

    /// Total matches for the current query, ignoring the result limit
    pub fn result_count(&self) -> usize {
        count_matches(&self.index, &self.query)
    }

    /// Empty-query suggestions: recent selections, or the session sample when there are none
    pub fn suggestions(&self) -> Vec<&Record> {
        if !self.history.is_empty() {
            return self
                .history
                .list()
                .iter()
                .take(self.config.suggestion_limit)
                .map(|entry| &entry.record)
                .collect();
        }
        self.sample.iter().filter_map(|&i| self.records.get(i)).collect()
    }

    // ---------------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------------

    /// Select `record`: remember it, reset the query, close the dropdown and notify
    pub fn select(&mut self, record: Record) -> SelectionOutcome {
        if let Err(e) = self.history.record(record.clone()) {
            warn!(id = %record.id, error = %e, "failed to save search history");
        }

        self.query.clear();
        self.open = false;

        match self.sink.as_mut() {
            Some(sink) => {
                sink.on_select(&record);
                SelectionOutcome::Delivered
            }
            None => SelectionOutcome::Navigate(detail_path(
                &self.config.detail_route_prefix,
                &record.id,
            )),
        }
    }

    /// Select by id, looking in the collection first and then in history
    pub fn select_by_id(&mut self, id: &RecordId) -> Option<SelectionOutcome> {
        let record = self
            .records
            .iter()
            .find(|r| &r.id == id)
            .or_else(|| self.history.list().iter().map(|e| &e.record).find(|r| &r.id == id))
            .cloned()?;
        Some(self.select(record))
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear()
    }
}
