mod fake_transport;
mod reqwest_transport;

pub use fake_transport::*;
pub use reqwest_transport::*;
