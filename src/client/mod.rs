mod authenticated_client;
mod backoffice;
mod error;
mod session_watcher;

pub use authenticated_client::*;
pub use backoffice::*;
pub use error::*;
pub use session_watcher::*;
