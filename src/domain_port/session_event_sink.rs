use crate::domain_model::SessionEvent;

/// Receives session lifecycle events on behalf of the application shell.
pub trait SessionEventSink: Send + Sync {
    fn publish(&self, event: SessionEvent);
}
