pub mod initialize;
pub mod jsonrpc;
pub mod tool;

pub use initialize::{InitializeParams, InitializeResult, ServerCapabilities, ServerInfo};
pub use jsonrpc::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
pub use tool::{CallToolParams, CallToolResult, ContentBlock, DnsQueryArgs, ToolDescriptor};
