use chrono::{DateTime, Utc};
use serde::Serialize;

/// Session lifecycle notifications published to the application shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum SessionEvent {
    LoggedIn,
    Refreshed,
    LoggedOut(SessionEnded),
    Expired(SessionExpired),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionEnded {
    pub redirect_to: String,
    pub at: DateTime<Utc>,
}

/// The session cannot be continued; the shell should navigate to `redirect_to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionExpired {
    pub redirect_to: String,
    pub reason: ExpiryReason,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryReason {
    /// The refresh endpoint failed or rejected the session cookie.
    RefreshFailed,
    /// A request that was already resent after a refresh got another 401.
    RejectedAfterRefresh,
}
