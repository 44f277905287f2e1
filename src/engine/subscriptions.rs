use std::sync::mpsc::Sender;

use super::interface::Event;

/// Boards registered for bulk pushes.
///
/// A subscriber whose receiver has been dropped is forgotten on the next
/// broadcast.
pub struct Subscriptions {
    entries: Vec<Sender<Event>>,
}

impl Default for Subscriptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Subscriptions {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, notify_tx: Sender<Event>) {
        self.entries.push(notify_tx);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Send a copy of `event` to every live subscriber.
    pub fn broadcast(&mut self, event: &Event) {
        self.entries.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
