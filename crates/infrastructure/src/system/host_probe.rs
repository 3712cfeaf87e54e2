use async_trait::async_trait;
use dns_mcp_application::ports::SystemProbe;
use dns_mcp_domain::DomainError;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::fs;
use tokio::process::Command;
use tracing::debug;

const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs real processes and reads real files on the host.
pub struct HostSystemProbe {
    command_timeout: Duration,
}

impl HostSystemProbe {
    pub fn new() -> Self {
        Self {
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    pub fn with_timeout(command_timeout: Duration) -> Self {
        Self { command_timeout }
    }
}

impl Default for HostSystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SystemProbe for HostSystemProbe {
    async fn run_command(&self, program: &str, args: &[&str]) -> Result<String, DomainError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let output = tokio::time::timeout(self.command_timeout, command.output())
            .await
            .map_err(|_| {
                DomainError::CommandTimeout(format!(
                    "{} did not finish within {}s",
                    program,
                    self.command_timeout.as_secs_f32()
                ))
            })?
            .map_err(|e| DomainError::CommandFailed(format!("{}: {}", program, e)))?;

        debug!(
            program,
            status = ?output.status.code(),
            bytes = output.stdout.len(),
            "Command finished"
        );

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn read_file(&self, path: &Path) -> Result<String, DomainError> {
        fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to read {}: {}", path.display(), e)))
    }
}
