mod refresher;
mod session_context;

pub use refresher::*;
pub use session_context::*;
