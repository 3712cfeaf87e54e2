use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Accepted for compatibility; the stdio transport never listens on it.
    #[serde(default = "default_port")]
    pub port: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> i64 {
    3000
}
