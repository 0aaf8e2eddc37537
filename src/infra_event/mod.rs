mod broadcast_session_events;

pub use broadcast_session_events::*;
