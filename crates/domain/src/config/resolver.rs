use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Upper bound on lookups running in parallel on the blocking pool.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_workers: default_max_workers(),
        }
    }
}

fn default_max_workers() -> usize {
    32
}
