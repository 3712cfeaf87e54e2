use crate::dto::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, JSONRPC_VERSION};
use crate::errors::ApiError;
use crate::handlers;
use crate::state::AppState;
use serde_json::Value;
use tracing::{debug, warn};

/// Dispatches JSON-RPC messages to the MCP handlers.
///
/// Stateless apart from the injected [`AppState`], so one router can serve
/// any number of concurrent messages.
#[derive(Clone)]
pub struct McpRouter {
    state: AppState,
}

impl McpRouter {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Handle one raw line. Returns the serialized reply, or `None` for
    /// notifications and blank lines.
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<Value>(line) {
            Ok(value) => self.handle_value(value).await?,
            Err(e) => {
                warn!(error = %e, "Discarding malformed JSON-RPC message");
                JsonRpcResponse::failure(Value::Null, ApiError::Parse(e.to_string()).into())
            }
        };

        match serde_json::to_string(&response) {
            Ok(serialized) => Some(serialized),
            Err(e) => {
                warn!(error = %e, "Failed to serialize JSON-RPC response");
                None
            }
        }
    }

    pub async fn handle_value(&self, value: Value) -> Option<JsonRpcResponse> {
        let id = value.get("id").cloned().unwrap_or(Value::Null);

        if !value.is_object() {
            return Some(JsonRpcResponse::failure(
                Value::Null,
                ApiError::InvalidRequest("expected a single JSON object".to_string()).into(),
            ));
        }

        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::failure(
                    id,
                    ApiError::InvalidRequest(e.to_string()).into(),
                ))
            }
        };

        self.handle(request).await
    }

    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::failure(
                request.id.unwrap_or(Value::Null),
                ApiError::InvalidRequest(format!("unsupported jsonrpc version {}", request.jsonrpc))
                    .into(),
            ));
        }

        if request.is_notification() {
            debug!(method = %request.method, "Notification received");
            return None;
        }

        let id = request.id.clone().unwrap_or(Value::Null);
        if !(id.is_string() || id.is_number()) {
            return Some(JsonRpcResponse::failure(
                Value::Null,
                ApiError::InvalidRequest("id must be a string or a number".to_string()).into(),
            ));
        }

        debug!(method = %request.method, id = %id, "Request received");

        let outcome = match request.method.as_str() {
            "initialize" => handlers::handle_initialize(&self.state, request.params),
            "ping" => Ok(handlers::handle_ping()),
            "tools/list" => Ok(handlers::handle_list_tools()),
            "tools/call" => handlers::handle_call_tool(&self.state, request.params).await,
            other => Err(ApiError::MethodNotFound(other.to_string())),
        };

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(id, result),
            Err(e) => {
                debug!(method = %request.method, error = %e, "Request rejected");
                JsonRpcResponse::failure(id, JsonRpcError::from(e))
            }
        })
    }
}
