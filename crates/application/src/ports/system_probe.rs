use async_trait::async_trait;
use dns_mcp_domain::DomainError;
use std::path::Path;

/// Access to the host's processes and files, as used by nameserver discovery.
#[async_trait]
pub trait SystemProbe: Send + Sync {
    /// Runs `program` and returns its standard output.
    ///
    /// A non-zero exit status is not an error; a missing program, a spawn
    /// failure or a timeout is.
    async fn run_command(&self, program: &str, args: &[&str]) -> Result<String, DomainError>;

    async fn read_file(&self, path: &Path) -> Result<String, DomainError>;
}
