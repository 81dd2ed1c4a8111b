use std::sync::Arc;

use crate::domain::events::errors::EventSourceError;
use crate::domain::events::model::StorefrontEvent;
use crate::domain::events::source::{EventHandler, EventSource};
use crate::domain::logger::Logger;

/// Routes each event to the registered handlers, in registration order.
pub struct EventDispatcher<'a> {
    handlers: Vec<Box<dyn EventHandler + 'a>>,
    logger: Arc<dyn Logger>,
}

impl<'a> EventDispatcher<'a> {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            handlers: Vec::new(),
            logger,
        }
    }

    pub fn register(&mut self, handler: impl EventHandler + 'a) {
        self.handlers.push(Box::new(handler));
    }

    /// Returns true when at least one handler consumed the event.
    pub fn dispatch(&mut self, event: &StorefrontEvent) -> bool {
        let mut handled = false;
        for handler in self.handlers.iter_mut() {
            handled |= handler.handle(event);
        }

        if !handled {
            self.logger
                .warn(&format!("No handler registered for {:?}", event));
        }
        handled
    }

    /// Pulls events until the source is exhausted. Returns how many were dispatched.
    pub fn run(&mut self, source: &mut dyn EventSource) -> Result<u64, EventSourceError> {
        let mut count = 0;
        while let Some(event) = source.next_event()? {
            self.dispatch(&event);
            count += 1;
        }
        self.logger
            .info(&format!("Event source exhausted after {} events", count));
        Ok(count)
    }
}
