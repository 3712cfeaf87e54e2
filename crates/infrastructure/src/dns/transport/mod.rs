//! Blocking transports for one query/response exchange with one nameserver.
//!
//! These run on tokio's blocking pool, never on the async executor.

pub mod tcp;
pub mod udp;

use dns_mcp_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

pub trait DnsTransport: Send + Sync {
    /// Send `message_bytes` and return the raw response whose ID equals
    /// `expected_id`, waiting at most `timeout`.
    fn send(
        &self,
        message_bytes: &[u8],
        expected_id: u16,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub(crate) fn is_timeout(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    )
}

pub(crate) fn io_error(server: SocketAddr, context: &str, error: io::Error) -> DomainError {
    if is_timeout(&error) {
        DomainError::TransportTimeout {
            server: server.to_string(),
        }
    } else {
        DomainError::Transport {
            server: server.to_string(),
            message: format!("{}: {}", context, error),
        }
    }
}
