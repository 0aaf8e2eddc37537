//! Logging goes through `tracing`. The subscriber starts at `info` and is
//! switched to the configured filter once settings are loaded.

mod logger;
pub use logger::*;

pub use tracing::{debug, error, info, trace, warn};
