use crate::domain_model::SessionEvent;
use crate::domain_port::SessionEventSink;
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Fans session events out to any number of subscribers.
///
/// Events published while nobody listens are dropped. A slow subscriber that
/// falls more than `capacity` events behind observes `Lagged`.
pub struct BroadcastSessionEvents {
    sender: broadcast::Sender<SessionEvent>,
}

impl BroadcastSessionEvents {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        BroadcastSessionEvents { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }
}

impl Default for BroadcastSessionEvents {
    fn default() -> Self {
        Self::new(64)
    }
}

impl SessionEventSink for BroadcastSessionEvents {
    fn publish(&self, event: SessionEvent) {
        match &event {
            SessionEvent::Expired(expired) => info!(
                reason = ?expired.reason,
                redirect_to = %expired.redirect_to,
                "session expired"
            ),
            other => debug!(event = ?other, "session event"),
        }
        if self.sender.send(event).is_err() {
            debug!("no session event subscribers");
        }
    }
}
