use crate::dto::initialize::{ToolsCapability, DEFAULT_PROTOCOL_VERSION};
use crate::dto::{InitializeParams, InitializeResult, ServerCapabilities, ServerInfo};
use crate::errors::ApiError;
use crate::state::{AppState, SERVER_NAME};
use serde_json::{json, Value};
use tracing::info;

pub fn handle_initialize(state: &AppState, params: Option<Value>) -> Result<Value, ApiError> {
    let params: InitializeParams = match params {
        Some(value) => serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidParams(format!("initialize: {}", e)))?,
        None => InitializeParams::default(),
    };

    let protocol_version = params
        .protocol_version
        .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string());

    info!(
        protocol_version = %protocol_version,
        client = ?params.client_info,
        "MCP session initialized"
    );

    let result = InitializeResult {
        protocol_version,
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: state.server_version.to_string(),
        },
    };

    Ok(serde_json::to_value(result)?)
}

pub fn handle_ping() -> Value {
    json!({})
}
