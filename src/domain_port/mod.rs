// storage

mod key_value_store;

pub use key_value_store::*;

// wire

mod http_transport;

pub use http_transport::*;

// shell

mod session_event_sink;

pub use session_event_sink::*;
