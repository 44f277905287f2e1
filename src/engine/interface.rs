use std::sync::mpsc::Sender;

use crate::types::{CloseOutcome, RawOpportunity, RemoteError};

/// Handle to the backend engine held by the board.
///
/// Cheaply cloneable. When the last handle is dropped the sender channel
/// closes, signalling the engine to shut down.
#[derive(Clone)]
pub struct EngineHandle {
    tx: tokio::sync::mpsc::UnboundedSender<Request>,
}

impl EngineHandle {
    pub(super) fn new(tx: tokio::sync::mpsc::UnboundedSender<Request>) -> Self {
        Self { tx }
    }

    /// Send a request to the engine. Non-blocking — returns immediately.
    pub fn send(&self, req: Request) {
        // Ignore errors: if the receiver is gone the engine has already shut down.
        let _ = self.tx.send(req);
    }
}

/// Implemented by every backend the board can talk to.
pub trait Engine: Send + 'static {
    fn start(self) -> EngineHandle;
}

/// All operations the board can send to the engine.
pub enum Request {
    // -----------------------------------------------------------------------
    // Bulk load (push-based)
    // -----------------------------------------------------------------------
    /// Register for the full collection. The engine pushes the current data
    /// right away and again after every `Invalidate`.
    Subscribe { notify_tx: Sender<Event> },
    /// The backing data changed elsewhere; re-push to every subscriber.
    Invalidate,

    // -----------------------------------------------------------------------
    // Fetch on demand
    // -----------------------------------------------------------------------
    FetchByAccount {
        /// Echoed back so the board can drop out-of-order replies.
        request_id: u64,
        account_name: String,
        reply_tx: Sender<Event>,
    },

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------
    CloseOpportunity {
        id_opp: String,
        reply_tx: Sender<Event>,
    },

    // -----------------------------------------------------------------------
    // Control
    // -----------------------------------------------------------------------
    Shutdown,
}

/// All events the engine can push back to the board.
#[derive(Debug, Clone)]
pub enum Event {
    // -----------------------------------------------------------------------
    // Bulk load
    // -----------------------------------------------------------------------
    OpportunitiesLoaded {
        opportunities: Vec<RawOpportunity>,
    },
    LoadFailed {
        error: RemoteError,
    },

    // -----------------------------------------------------------------------
    // Filter results
    // -----------------------------------------------------------------------
    FilterFetched {
        request_id: u64,
        opportunities: Vec<RawOpportunity>,
    },
    FilterFailed {
        request_id: u64,
        error: RemoteError,
    },

    // -----------------------------------------------------------------------
    // Mutation results
    // -----------------------------------------------------------------------
    CloseCompleted {
        id_opp: String,
        outcome: CloseOutcome,
    },
    CloseFailed {
        id_opp: String,
        error: RemoteError,
    },
}
