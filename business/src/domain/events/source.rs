use super::errors::EventSourceError;
use super::model::StorefrontEvent;

/// Producer of shopper events. `Ok(None)` means the session is over.
pub trait EventSource {
    fn next_event(&mut self) -> Result<Option<StorefrontEvent>, EventSourceError>;
}

/// Reacts to the events it cares about.
pub trait EventHandler {
    /// Returns true when the event was consumed.
    fn handle(&mut self, event: &StorefrontEvent) -> bool;
}
