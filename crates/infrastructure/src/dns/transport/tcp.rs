//! TCP Transport for DNS queries (RFC 1035 §4.2.2), used after a truncated
//! UDP reply. Every message carries a 2-byte big-endian length prefix.

use super::{io_error, DnsTransport};
use dns_mcp_domain::DomainError;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::time::Duration;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn connect(&self, timeout: Duration) -> Result<TcpStream, DomainError> {
        let stream = TcpStream::connect_timeout(&self.server_addr, timeout)
            .map_err(|e| io_error(self.server_addr, "connect", e))?;

        stream
            .set_nodelay(true)
            .and_then(|_| stream.set_read_timeout(Some(timeout)))
            .and_then(|_| stream.set_write_timeout(Some(timeout)))
            .map_err(|e| io_error(self.server_addr, "configure socket", e))?;

        Ok(stream)
    }
}

impl DnsTransport for TcpTransport {
    fn send(
        &self,
        message_bytes: &[u8],
        expected_id: u16,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let mut stream = self.connect(timeout)?;

        send_with_length_prefix(&mut stream, message_bytes)
            .map_err(|e| io_error(self.server_addr, "send", e))?;

        debug!(
            server = %self.server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response = read_with_length_prefix(&mut stream)
            .map_err(|e| io_error(self.server_addr, "receive", e))?;

        if response.len() < 2 || u16::from_be_bytes([response[0], response[1]]) != expected_id {
            return Err(DomainError::Transport {
                server: self.server_addr.to_string(),
                message: "TCP response ID does not match the query".to_string(),
            });
        }

        debug!(
            server = %self.server_addr,
            response_len = response.len(),
            "TCP response received"
        );

        Ok(response)
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}

pub(crate) fn send_with_length_prefix<S: Write>(
    stream: &mut S,
    message_bytes: &[u8],
) -> std::io::Result<()> {
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "DNS message too large")
    })?;

    stream.write_all(&length.to_be_bytes())?;
    stream.write_all(message_bytes)?;
    stream.flush()
}

pub(crate) fn read_with_length_prefix<S: Read>(stream: &mut S) -> std::io::Result<Vec<u8>> {
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf)?;

    let response_len = u16::from_be_bytes(len_buf) as usize;

    let mut response = vec![0u8; response_len];
    stream.read_exact(&mut response)?;

    Ok(response)
}
