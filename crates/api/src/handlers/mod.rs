pub mod initialize;
pub mod tools;

pub use initialize::{handle_initialize, handle_ping};
pub use tools::{handle_call_tool, handle_list_tools};
