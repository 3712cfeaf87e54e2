//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). If the response has the TC bit set,
//! the caller retries via TCP.

use super::{io_error, DnsTransport};
use dns_mcp_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
pub const MAX_UDP_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    fn bind(&self) -> Result<UdpSocket, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        UdpSocket::bind(bind_addr).map_err(|e| io_error(self.server_addr, "bind", e))
    }
}

impl DnsTransport for UdpTransport {
    fn send(
        &self,
        message_bytes: &[u8],
        expected_id: u16,
        timeout: Duration,
    ) -> Result<Vec<u8>, DomainError> {
        let socket = self.bind()?;
        let deadline = Instant::now() + timeout;

        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .map_err(|e| io_error(self.server_addr, "send", e))?;

        debug!(server = %self.server_addr, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(DomainError::TransportTimeout {
                    server: self.server_addr.to_string(),
                });
            }
            socket
                .set_read_timeout(Some(remaining))
                .map_err(|e| io_error(self.server_addr, "set read timeout", e))?;

            let (bytes_received, from_addr) = socket
                .recv_from(&mut recv_buf)
                .map_err(|e| io_error(self.server_addr, "receive", e))?;

            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            if bytes_received < 2 {
                continue;
            }

            let wire_id = u16::from_be_bytes([recv_buf[0], recv_buf[1]]);
            if wire_id != expected_id {
                debug!(
                    server = %self.server_addr,
                    expected_id,
                    wire_id,
                    "Ignoring UDP response with mismatched ID"
                );
                continue;
            }

            debug!(server = %self.server_addr, bytes_received, "UDP response received");

            recv_buf.truncate(bytes_received);
            return Ok(recv_buf);
        }
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
