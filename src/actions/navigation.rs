use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Page type understood by the host for a record view.
pub const RECORD_PAGE: &str = "standard__recordPage";

/// Where a "view details" action should take the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPageRef {
    #[serde(rename = "type")]
    pub page_type: String,
    pub record_id: String,
    pub object_api_name: String,
    pub action_name: String,
}

impl RecordPageRef {
    /// View page of a single opportunity.
    pub fn opportunity(record_id: impl Into<String>) -> Self {
        Self {
            page_type: RECORD_PAGE.to_owned(),
            record_id: record_id.into(),
            object_api_name: "Opportunity".to_owned(),
            action_name: "view".to_owned(),
        }
    }
}

/// Sink for navigation requests. Fire-and-forget.
pub trait Navigator {
    fn navigate(&self, target: &RecordPageRef);
}

/// Navigator that only logs the request.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, target: &RecordPageRef) {
        tracing::info!(
            "navigate: {} {} {}",
            target.object_api_name,
            target.record_id,
            target.action_name
        );
    }
}

/// Navigator that keeps every request it receives.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    targets: Mutex<Vec<RecordPageRef>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn targets(&self) -> Vec<RecordPageRef> {
        self.targets
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: &RecordPageRef) {
        if let Ok(mut guard) = self.targets.lock() {
            guard.push(target.clone());
        }
    }
}

impl<T: Navigator + ?Sized> Navigator for std::sync::Arc<T> {
    fn navigate(&self, target: &RecordPageRef) {
        (**self).navigate(target);
    }
}
