use tokio::sync::mpsc::UnboundedReceiver;

use crate::types::{CloseOutcome, RawOpportunity, RemoteError};

use super::interface::{Engine, EngineHandle, Event, Request};
use super::subscriptions::Subscriptions;

/// Stage the stub writes onto records it closes.
const CLOSED_STAGE: &str = "Closed Won";

/// A stub engine that serves pre-loaded fixture data without any network calls.
///
/// Filters match the account name by case-insensitive substring, closes flip
/// the stored record, and each operation can be forced to fail.
#[derive(Default)]
pub struct StubEngine {
    pub opportunities: Vec<RawOpportunity>,
    /// When set, every bulk push is a `LoadFailed`.
    pub load_error: Option<RemoteError>,
    /// When set, every filter request is a `FilterFailed`.
    pub filter_error: Option<RemoteError>,
    /// When set, every close request is a `CloseFailed`.
    pub close_error: Option<RemoteError>,
    /// Reply to use for every close instead of the computed one.
    pub close_outcome: Option<CloseOutcome>,
}

impl StubEngine {
    pub fn new(opportunities: Vec<RawOpportunity>) -> Self {
        Self {
            opportunities,
            ..Self::default()
        }
    }
}

impl Engine for StubEngine {
    fn start(self) -> EngineHandle {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Request>();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().expect("stub tokio runtime");
            rt.block_on(self.run_loop(rx));
        });
        EngineHandle::new(tx)
    }
}

impl StubEngine {
    async fn run_loop(mut self, mut rx: UnboundedReceiver<Request>) {
        let mut subscriptions = Subscriptions::new();
        while let Some(req) = rx.recv().await {
            match req {
                Request::Subscribe { notify_tx } => {
                    let _ = notify_tx.send(self.bulk_event());
                    subscriptions.register(notify_tx);
                }
                Request::Invalidate => {
                    tracing::debug!("stub: invalidate, {} subscriber(s)", subscriptions.len());
                    subscriptions.broadcast(&self.bulk_event());
                }
                Request::FetchByAccount {
                    request_id,
                    account_name,
                    reply_tx,
                } => {
                    let event = match &self.filter_error {
                        Some(error) => Event::FilterFailed {
                            request_id,
                            error: error.clone(),
                        },
                        None => Event::FilterFetched {
                            request_id,
                            opportunities: self.by_account(&account_name),
                        },
                    };
                    let _ = reply_tx.send(event);
                }
                Request::CloseOpportunity { id_opp, reply_tx } => {
                    let event = match self.close_error.clone() {
                        Some(error) => Event::CloseFailed { id_opp, error },
                        None => {
                            let outcome = self.close(&id_opp);
                            Event::CloseCompleted { id_opp, outcome }
                        }
                    };
                    let _ = reply_tx.send(event);
                }
                Request::Shutdown => break,
            }
        }
    }

    fn bulk_event(&self) -> Event {
        match &self.load_error {
            Some(error) => Event::LoadFailed {
                error: error.clone(),
            },
            None => Event::OpportunitiesLoaded {
                opportunities: self.opportunities.clone(),
            },
        }
    }

    fn by_account(&self, account_name: &str) -> Vec<RawOpportunity> {
        let needle = account_name.trim().to_lowercase();
        self.opportunities
            .iter()
            .filter(|opp| {
                needle.is_empty()
                    || opp
                        .account_name
                        .as_ref()
                        .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    fn close(&mut self, id_opp: &str) -> CloseOutcome {
        let outcome = match &self.close_outcome {
            Some(outcome) => outcome.clone(),
            None if self.opportunities.iter().any(|o| o.id_opp == id_opp) => {
                CloseOutcome::success("Oportunidade fechada com sucesso.")
            }
            None => CloseOutcome::new("error", "Oportunidade não encontrada."),
        };
        if outcome.is_success()
            && let Some(opp) = self.opportunities.iter_mut().find(|o| o.id_opp == id_opp)
        {
            opp.is_closed = true;
            CLOSED_STAGE.clone_into(&mut opp.stage_name);
        }
        outcome
    }
}
