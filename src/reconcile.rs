use crate::actions::{Toast, ToastVariant};
use crate::config::Messages;
use crate::ingest::normalize;
use crate::pagination::BoardState;
use crate::types::{ButtonVariant, CloseOutcome, Opportunity, RawOpportunity, RemoteError};

// ---------------------------------------------------------------------------
// Close reconciliation
// ---------------------------------------------------------------------------

/// Fields written onto a record after the backend confirms a close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosePatch {
    pub stage_name: String,
}

impl ClosePatch {
    pub fn new(stage_name: impl Into<String>) -> Self {
        Self {
            stage_name: stage_name.into(),
        }
    }

    fn apply(&self, opp: &Opportunity) -> Opportunity {
        Opportunity {
            button_variant: ButtonVariant::Neutral,
            is_closed: true,
            stage_name: self.stage_name.clone(),
            ..opp.clone()
        }
    }
}

impl Default for ClosePatch {
    fn default() -> Self {
        Self::new("Closed Won")
    }
}

/// Patch the record matching `id_opp` in both the full set and the current page.
///
/// Both sequences are rebuilt; every other record is carried over unchanged.
/// Paging counters are not touched.
pub fn apply_close_patch(mut state: BoardState, id_opp: &str, patch: &ClosePatch) -> BoardState {
    state.all_opportunities = replace_matching(&state.all_opportunities, id_opp, patch);
    state.opportunities = replace_matching(&state.opportunities, id_opp, patch);
    state
}

fn replace_matching(rows: &[Opportunity], id_opp: &str, patch: &ClosePatch) -> Vec<Opportunity> {
    rows.iter()
        .map(|opp| {
            if opp.id_opp == id_opp {
                patch.apply(opp)
            } else {
                opp.clone()
            }
        })
        .collect()
}

/// Fold a close reply into the state.
///
/// Only a `"success"` reply patches the record; any reply yields a
/// notification whose variant follows the reply type.
pub fn apply_close_outcome(
    state: BoardState,
    id_opp: &str,
    outcome: &CloseOutcome,
    patch: &ClosePatch,
    messages: &Messages,
) -> (BoardState, Toast) {
    let toast = Toast::new(
        messages.result_title.clone(),
        outcome.message.clone(),
        ToastVariant::from_result_type(&outcome.kind),
    );
    if outcome.is_success() {
        (apply_close_patch(state, id_opp, patch), toast)
    } else {
        (state, toast)
    }
}

// ---------------------------------------------------------------------------
// Fetch reconciliation
// ---------------------------------------------------------------------------

/// Replace the board with a filter response. An empty response clears it.
pub fn apply_filter_results(state: BoardState, raw: &[RawOpportunity]) -> BoardState {
    if raw.is_empty() {
        state.clear()
    } else {
        state.with_opportunities(normalize(raw))
    }
}

/// Replace the board with a bulk load. Unlike a filter, an empty load just
/// paginates to page 0.
pub fn apply_bulk_load(state: BoardState, raw: &[RawOpportunity]) -> BoardState {
    state.with_opportunities(normalize(raw))
}

/// Notification for a failed filter or close call.
pub fn failure_toast(error: &RemoteError, messages: &Messages) -> Toast {
    Toast::error(
        messages.error_title.clone(),
        error
            .message()
            .map_or_else(|| messages.generic_error.clone(), str::to_owned),
    )
}

/// Notification for a failed bulk load. The remote message is not shown.
pub fn load_failure_toast(messages: &Messages) -> Toast {
    Toast::error(messages.error_title.clone(), messages.load_error.clone())
}
