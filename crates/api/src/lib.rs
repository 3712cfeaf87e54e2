//! MCP (JSON-RPC 2.0) surface of the DNS query tool.
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::McpRouter;
pub use state::AppState;
