use std::num::NonZeroUsize;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crate::actions::{Navigator, Notifier, RecordPageRef, RowAction};
use crate::columns::{Column, columns};
use crate::config::AppConfig;
use crate::engine::{EngineHandle, Event, Request};
use crate::error::BoardError;
use crate::pagination::BoardState;
use crate::reconcile::{
    ClosePatch, apply_bulk_load, apply_close_outcome, apply_filter_results, failure_toast,
    load_failure_toast,
};
use crate::types::Opportunity;

// ---------------------------------------------------------------------------
// Opportunity manager
// ---------------------------------------------------------------------------

/// Wires the backend engine and the two sinks to the board state.
///
/// Requests go out through the engine handle; replies land on a private
/// channel and are folded into the state by `apply_event`, one at a time, in
/// arrival order. Remote failures never escape: they become notifications
/// and leave the state as it was.
pub struct OpportunityManager<N: Notifier, V: Navigator> {
    engine: EngineHandle,
    notifier: N,
    navigator: V,
    config: AppConfig,
    patch: ClosePatch,
    state: BoardState,
    reply_tx: Sender<Event>,
    reply_rx: Receiver<Event>,
    next_request_id: u64,
    /// Id of the most recent filter request; older replies are dropped.
    latest_filter: Option<u64>,
    subscribed: bool,
}

impl<N: Notifier, V: Navigator> OpportunityManager<N, V> {
    pub fn new(engine: EngineHandle, notifier: N, navigator: V, config: AppConfig) -> Self {
        let (reply_tx, reply_rx) = std::sync::mpsc::channel();
        Self {
            engine,
            notifier,
            navigator,
            patch: ClosePatch::new(config.closed_stage_name.clone()),
            state: BoardState::new(config.page_size),
            config,
            reply_tx,
            reply_rx,
            next_request_id: 0,
            latest_filter: None,
            subscribed: false,
        }
    }

    // -----------------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------------

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Rows on the current page.
    pub fn opportunities(&self) -> &[Opportunity] {
        self.state.opportunities()
    }

    pub fn columns(&self) -> Vec<Column> {
        columns()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// True until the first load or filter reply arrives.
    pub fn is_loading(&self) -> bool {
        !self.state.is_loaded()
    }

    /// e.g. `"Página 1 de 3"`.
    pub fn page_label(&self) -> String {
        self.config
            .messages
            .format_page_label(self.state.page_number(), self.state.total_pages())
    }

    /// Text to show instead of the grid, if any.
    pub fn empty_state_message(&self) -> Option<&str> {
        (self.state.is_loaded() && self.state.is_empty())
            .then_some(self.config.messages.empty_state.as_str())
    }

    // -----------------------------------------------------------------------
    // Host input
    // -----------------------------------------------------------------------

    /// Register for bulk pushes of the full collection. Only the first call
    /// subscribes; later calls are no-ops.
    pub fn connect(&mut self) {
        if self.subscribed {
            tracing::debug!("manager: already subscribed");
            return;
        }
        self.subscribed = true;
        tracing::debug!("manager: subscribing to bulk load");
        self.engine.send(Request::Subscribe {
            notify_tx: self.reply_tx.clone(),
        });
    }

    /// Ask the engine to re-push the full collection to every subscriber.
    pub fn refresh(&self) {
        self.engine.send(Request::Invalidate);
    }

    /// Re-fetch by account name. Every call issues a new request; only the
    /// reply to the latest one is applied. Returns the request id.
    pub fn handle_filter_change(&mut self, account_name: &str) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.latest_filter = Some(request_id);
        tracing::debug!("manager: filter[{request_id}] account={account_name:?}");
        self.engine.send(Request::FetchByAccount {
            request_id,
            account_name: account_name.to_owned(),
            reply_tx: self.reply_tx.clone(),
        });
        request_id
    }

    /// Dispatch a row button. "view_details" navigates, "mark_closed" asks
    /// the engine to close the record; anything else is ignored.
    pub fn handle_row_action(&self, action_name: &str, id_opp: &str) -> Result<(), BoardError> {
        let Some(action) = RowAction::parse(action_name) else {
            tracing::debug!("manager: ignoring row action {action_name:?}");
            return Err(BoardError::UnknownAction(action_name.to_owned()));
        };
        match action {
            RowAction::ViewDetails => {
                self.navigator.navigate(&RecordPageRef::opportunity(id_opp));
            }
            RowAction::MarkClosed => {
                tracing::debug!("manager: closing {id_opp}");
                self.engine.send(Request::CloseOpportunity {
                    id_opp: id_opp.to_owned(),
                    reply_tx: self.reply_tx.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn next_page(&mut self) {
        self.state = std::mem::take(&mut self.state).next_page();
    }

    pub fn previous_page(&mut self) {
        self.state = std::mem::take(&mut self.state).previous_page();
    }

    /// Change rows per page. Existing counters are not recomputed until the
    /// next load or filter reply; paging uses the new size immediately.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<(), BoardError> {
        let size = NonZeroUsize::new(page_size).ok_or(BoardError::InvalidPageSize(page_size))?;
        self.state = std::mem::take(&mut self.state).with_page_size(size);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Engine replies
    // -----------------------------------------------------------------------

    /// Apply every reply already waiting. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.reply_rx.try_recv() {
            self.apply_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait up to `timeout` for one reply and apply it.
    pub fn process_next(&mut self, timeout: Duration) -> bool {
        match self.reply_rx.recv_timeout(timeout) {
            Ok(event) => {
                self.apply_event(event);
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Fold one engine event into the state and raise any notification.
    pub fn apply_event(&mut self, event: Event) {
        match event {
            Event::OpportunitiesLoaded { opportunities } => {
                tracing::debug!("manager: bulk load count={}", opportunities.len());
                self.state = apply_bulk_load(std::mem::take(&mut self.state), &opportunities);
            }
            Event::LoadFailed { error } => {
                tracing::debug!("manager: bulk load failed: {error}");
                self.notifier.notify(load_failure_toast(&self.config.messages));
            }
            Event::FilterFetched {
                request_id,
                opportunities,
            } => {
                if !self.is_latest_filter(request_id) {
                    return;
                }
                tracing::debug!(
                    "manager: filter[{request_id}] count={}",
                    opportunities.len()
                );
                self.state = apply_filter_results(std::mem::take(&mut self.state), &opportunities);
            }
            Event::FilterFailed { request_id, error } => {
                if !self.is_latest_filter(request_id) {
                    return;
                }
                tracing::debug!("manager: filter[{request_id}] failed: {error}");
                self.notifier
                    .notify(failure_toast(&error, &self.config.messages));
            }
            Event::CloseCompleted { id_opp, outcome } => {
                tracing::debug!("manager: close {id_opp} -> {}", outcome.kind);
                let (state, toast) = apply_close_outcome(
                    std::mem::take(&mut self.state),
                    &id_opp,
                    &outcome,
                    &self.patch,
                    &self.config.messages,
                );
                self.state = state;
                self.notifier.notify(toast);
            }
            Event::CloseFailed { id_opp, error } => {
                tracing::debug!("manager: close {id_opp} failed: {error}");
                self.notifier
                    .notify(failure_toast(&error, &self.config.messages));
            }
        }
    }

    fn is_latest_filter(&self, request_id: u64) -> bool {
        if self.latest_filter == Some(request_id) {
            return true;
        }
        tracing::warn!(
            "manager: dropping stale filter reply {request_id} (latest {:?})",
            self.latest_filter
        );
        false
    }
}
