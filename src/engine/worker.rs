//! Off-thread search runner.

use std::fmt;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use crate::board::{BoardError, SearchResult};

use super::protocol::{run_search, SearchEvent, SearchRequest};

/// Search thread stack size (8 MB)
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Error type for running a search on a worker thread
#[derive(Debug)]
pub enum WorkerError {
    /// The request's position was rejected
    InvalidPosition(BoardError),
    /// The search thread could not be started
    Spawn(io::Error),
    /// The search thread panicked
    Panicked,
}

impl fmt::Display for WorkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerError::InvalidPosition(err) => write!(f, "Invalid position: {err}"),
            WorkerError::Spawn(err) => write!(f, "Failed to spawn search thread: {err}"),
            WorkerError::Panicked => write!(f, "Search thread panicked"),
        }
    }
}

impl std::error::Error for WorkerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorkerError::InvalidPosition(err) => Some(err),
            WorkerError::Spawn(err) => Some(err),
            WorkerError::Panicked => None,
        }
    }
}

impl From<BoardError> for WorkerError {
    fn from(err: BoardError) -> Self {
        WorkerError::InvalidPosition(err)
    }
}

impl From<io::Error> for WorkerError {
    fn from(err: io::Error) -> Self {
        WorkerError::Spawn(err)
    }
}

/// A search running on its own thread, streaming [`SearchEvent`]s back.
pub struct SearchWorker {
    events: Receiver<SearchEvent>,
    handle: JoinHandle<Result<SearchResult, BoardError>>,
}

impl SearchWorker {
    /// Validate the request's position and start searching it.
    pub fn spawn(request: SearchRequest) -> Result<Self, WorkerError> {
        request.board()?;

        let (sender, events) = mpsc::channel();
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let mut receiver_gone = false;
                run_search(&request, &mut |event| {
                    if sender.send(event).is_err() && !receiver_gone {
                        receiver_gone = true;
                        log::warn!("search events dropped: receiver disconnected");
                    }
                })
            })?;
        log::debug!("search worker started");

        Ok(SearchWorker { events, handle })
    }

    /// Next event, blocking. `None` once the terminal event has been taken.
    pub fn recv(&self) -> Option<SearchEvent> {
        self.events.recv().ok()
    }

    /// Next event if one is ready.
    pub fn try_recv(&self) -> Option<SearchEvent> {
        self.events.try_recv().ok()
    }

    /// Iterate events until the worker finishes.
    pub fn events(&self) -> impl Iterator<Item = SearchEvent> + '_ {
        self.events.iter()
    }

    /// Block until the search finishes. Unread events are discarded.
    pub fn wait_for_result(self) -> Result<SearchResult, WorkerError> {
        match self.handle.join() {
            Ok(result) => Ok(result?),
            Err(_) => {
                log::warn!("search thread panicked");
                Err(WorkerError::Panicked)
            }
        }
    }
}
