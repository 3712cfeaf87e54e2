use crate::dto::tool::DNS_QUERY_TOOL;
use crate::dto::{CallToolParams, CallToolResult, DnsQueryArgs, ToolDescriptor};
use crate::errors::ApiError;
use crate::state::AppState;
use serde_json::{json, Value};
use tracing::debug;

pub fn handle_list_tools() -> Value {
    json!({ "tools": [ToolDescriptor::dns_query()] })
}

pub async fn handle_call_tool(state: &AppState, params: Option<Value>) -> Result<Value, ApiError> {
    let params = params.ok_or_else(|| ApiError::InvalidParams("missing params".to_string()))?;
    let call: CallToolParams = serde_json::from_value(params)
        .map_err(|e| ApiError::InvalidParams(format!("tools/call: {}", e)))?;

    if call.name != DNS_QUERY_TOOL {
        return Err(ApiError::InvalidParams(format!("Unknown tool: {}", call.name)));
    }

    let arguments = call.arguments.unwrap_or_else(|| json!({}));
    let args: DnsQueryArgs = serde_json::from_value(arguments)
        .map_err(|e| ApiError::InvalidParams(format!("{}: {}", DNS_QUERY_TOOL, e)))?;

    debug!(host = %args.host, record_type = %args.record_type, "dns_query called");

    let result = state.query_dns.execute(&args.host, &args.record_type).await;

    Ok(serde_json::to_value(CallToolResult::from_query_result(&result)?)?)
}
