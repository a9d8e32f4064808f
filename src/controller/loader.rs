//! Background collection loads
//!
//! A load runs the fetch on its own thread and reports through a channel.
//! Each load carries a generation number; the controller only accepts the
//! result of its latest load, and a disposed controller accepts none.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use tracing::debug;

use crate::models::Record;
use crate::source::{FetchError, RecordSource};

pub(crate) type LoadResult = Result<Vec<Record>, FetchError>;

/// A fetch in flight
#[derive(Debug)]
pub(crate) struct PendingLoad {
    generation: u64,
    receiver: Receiver<LoadResult>,
}

pub(crate) enum PollOutcome {
    Pending,
    Ready(LoadResult),
    /// The worker went away without reporting (it panicked)
    Lost,
}

impl PendingLoad {
    pub(crate) fn spawn<S>(source: S, page: usize, page_size: usize, generation: u64) -> Self
    where
        S: RecordSource + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || {
            let result = source.fetch_page(page, page_size);
            // The receiver is gone if the load was superseded or the controller disposed
            if sender.send(result).is_err() {
                debug!(generation, "discarding result of abandoned load");
            }
        });

        Self { generation, receiver }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn poll(&self) -> PollOutcome {
        match self.receiver.try_recv() {
            Ok(result) => PollOutcome::Ready(result),
            Err(TryRecvError::Empty) => PollOutcome::Pending,
            Err(TryRecvError::Disconnected) => PollOutcome::Lost,
        }
    }

    /// Block until the fetch finishes
    pub(crate) fn wait(self) -> PollOutcome {
        match self.receiver.recv() {
            Ok(result) => PollOutcome::Ready(result),
            Err(_) => PollOutcome::Lost,
        }
    }
}
