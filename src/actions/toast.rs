use std::sync::Mutex;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    /// Map a backend result type onto a variant. Unknown types are informational.
    pub fn from_result_type(kind: &str) -> Self {
        match kind.to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

/// A user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message, ToastVariant::Error)
    }
}

/// Sink for notifications. Fire-and-forget: no reply, no ordering guarantee
/// relative to state changes.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Notifier that logs through `tracing` and drops the toast.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Error => {
                tracing::warn!("toast: [{}] {}", toast.title, toast.message);
            }
            _ => tracing::info!("toast: [{}] {}", toast.title, toast.message),
        }
    }
}

/// Notifier that keeps every toast it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the toasts received so far.
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        if let Ok(mut guard) = self.toasts.lock() {
            guard.push(toast);
        }
    }
}

impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    fn notify(&self, toast: Toast) {
        (**self).notify(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_type_maps_to_variant() {
        assert_eq!(ToastVariant::from_result_type("success"), ToastVariant::Success);
        assert_eq!(ToastVariant::from_result_type("ERROR"), ToastVariant::Error);
        assert_eq!(ToastVariant::from_result_type("warning"), ToastVariant::Warning);
        assert_eq!(ToastVariant::from_result_type("whatever"), ToastVariant::Info);
    }

    #[test]
    fn log_notifier_accepts_every_variant() {
        let notifier = LogNotifier;
        notifier.notify(Toast::error("Erro", "falhou"));
        notifier.notify(Toast::new("Resultado", "ok", ToastVariant::Success));
    }

    #[test]
    fn recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Toast::error("Erro", "a"));
        notifier.notify(Toast::new("Resultado", "b", ToastVariant::Success));
        let toasts = notifier.toasts();
        assert_eq!(toasts.len(), 2);
        assert_eq!(toasts[0].message, "a");
        assert_eq!(notifier.last().map(|t| t.variant), Some(ToastVariant::Success));
    }
}
