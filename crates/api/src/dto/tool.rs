use dns_mcp_domain::{QueryResult, RecordType};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const DNS_QUERY_TOOL: &str = "dns_query";

const DNS_QUERY_DESCRIPTION: &str = "Query DNS records for a hostname. \
Returns host, type, success, records (format varies by type), ttl (if successful), \
error (if not successful) and the upstream_servers used.";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

impl ToolDescriptor {
    pub fn dns_query() -> Self {
        Self {
            name: DNS_QUERY_TOOL,
            description: DNS_QUERY_DESCRIPTION,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "host": {
                        "type": "string",
                        "description": "The hostname to query (e.g., 'example.com')"
                    },
                    "type": {
                        "type": "string",
                        "description": format!(
                            "The DNS record type to query (default: 'A'). Supported types: {}",
                            RecordType::supported().join(", ")
                        ),
                        "default": "A"
                    }
                },
                "required": ["host"]
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CallToolParams {
    pub name: String,

    #[serde(default)]
    pub arguments: Option<Value>,
}

fn default_record_type() -> String {
    "A".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DnsQueryArgs {
    pub host: String,

    #[serde(rename = "type", default = "default_record_type")]
    pub record_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<ContentBlock>,
    pub structured_content: Value,
    pub is_error: bool,
}

impl CallToolResult {
    /// Wraps a query outcome; DNS failures are still a successful tool call.
    pub fn from_query_result(result: &QueryResult) -> Result<Self, serde_json::Error> {
        let text = serde_json::to_string(result)?;
        let structured = serde_json::to_value(result)?;

        Ok(Self {
            content: vec![ContentBlock { kind: "text", text }],
            structured_content: structured,
            is_error: false,
        })
    }
}
