mod file_key_value_store;
mod memory_key_value_store;

pub use file_key_value_store::*;
pub use memory_key_value_store::*;
