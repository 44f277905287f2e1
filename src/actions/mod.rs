// Row actions and the two fire-and-forget sinks they talk to.

pub mod navigation;
pub mod toast;

pub use navigation::{LogNavigator, Navigator, RecordPageRef, RecordingNavigator};
pub use toast::{LogNotifier, Notifier, RecordingNotifier, Toast, ToastVariant};

/// Name of the "view details" row button.
pub const VIEW_DETAILS: &str = "view_details";
/// Name of the "mark closed" row button.
pub const MARK_CLOSED: &str = "mark_closed";

/// Action triggered from a row button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ViewDetails,
    MarkClosed,
}

impl RowAction {
    /// Parse a button name. Unknown names yield `None` and are ignored by callers.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            VIEW_DETAILS => Some(Self::ViewDetails),
            MARK_CLOSED => Some(Self::MarkClosed),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ViewDetails => VIEW_DETAILS,
            Self::MarkClosed => MARK_CLOSED,
        }
    }
}
