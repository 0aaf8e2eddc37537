use crate::domain_model::SessionEvent;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::RecvError;
use tokio_util::sync::CancellationToken;

/// Drains session events into a callback until cancelled or until every
/// publisher is gone. Events already queued at cancellation are still handed
/// over.
pub struct SessionWatcher {
    events: Receiver<SessionEvent>,
    cancellation_token: CancellationToken,
}

impl SessionWatcher {
    pub fn new(events: Receiver<SessionEvent>, cancellation_token: CancellationToken) -> Self {
        Self {
            events,
            cancellation_token,
        }
    }

    /// Returns how many events were handed to `on_event`.
    pub async fn run<F>(mut self, mut on_event: F) -> anyhow::Result<usize>
    where
        F: FnMut(&SessionEvent) + Send,
    {
        let mut seen = 0;
        loop {
            tokio::select! {
                biased;
                _ = self.cancellation_token.cancelled() => {
                    tracing::debug!("session watcher shutting down...");
                    while let Ok(event) = self.events.try_recv() {
                        on_event(&event);
                        seen += 1;
                    }
                    break;
                }
                result = self.events.recv() => match result {
                    Ok(event) => {
                        on_event(&event);
                        seen += 1;
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "session watcher fell behind");
                    }
                    Err(RecvError::Closed) => break,
                },
            }
        }
        Ok(seen)
    }
}
