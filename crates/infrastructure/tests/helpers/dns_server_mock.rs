#![allow(dead_code)]
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_FORMERR: u8 = 1;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

/// One answer record, encoded by hand with the owner name compressed to the
/// question (`0xc0 0x0c`).
#[derive(Debug, Clone)]
pub enum MockRecord {
    A { ip: Ipv4Addr, ttl: u32 },
    Cname { target: String, ttl: u32 },
    Mx { preference: u16, exchange: String, ttl: u32 },
    Txt { segments: Vec<Vec<u8>>, ttl: u32 },
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
        ttl: u32,
    },
    /// Wraps a record with an explicit owner instead of the question name.
    Owned { owner: String, record: Box<MockRecord> },
}

impl MockRecord {
    pub fn a(ip: [u8; 4], ttl: u32) -> Self {
        MockRecord::A {
            ip: Ipv4Addr::from(ip),
            ttl,
        }
    }

    pub fn owned_by(self, owner: &str) -> Self {
        MockRecord::Owned {
            owner: owner.to_string(),
            record: Box::new(self),
        }
    }

    fn type_code(&self) -> u16 {
        match self {
            MockRecord::Owned { record, .. } => record.type_code(),
            MockRecord::A { .. } => 1,
            MockRecord::Cname { .. } => 5,
            MockRecord::Soa { .. } => 6,
            MockRecord::Mx { .. } => 15,
            MockRecord::Txt { .. } => 16,
        }
    }

    fn ttl(&self) -> u32 {
        match self {
            MockRecord::A { ttl, .. }
            | MockRecord::Cname { ttl, .. }
            | MockRecord::Mx { ttl, .. }
            | MockRecord::Txt { ttl, .. }
            | MockRecord::Soa { ttl, .. } => *ttl,
            MockRecord::Owned { record, .. } => record.ttl(),
        }
    }

    fn rdata(&self) -> Vec<u8> {
        match self {
            MockRecord::Owned { record, .. } => record.rdata(),
            MockRecord::A { ip, .. } => ip.octets().to_vec(),
            MockRecord::Cname { target, .. } => encode_name(target),
            MockRecord::Mx {
                preference,
                exchange,
                ..
            } => {
                let mut rdata = preference.to_be_bytes().to_vec();
                rdata.extend(encode_name(exchange));
                rdata
            }
            MockRecord::Txt { segments, .. } => {
                let mut rdata = Vec::new();
                for segment in segments {
                    rdata.push(segment.len() as u8);
                    rdata.extend_from_slice(segment);
                }
                rdata
            }
            MockRecord::Soa {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
                ..
            } => {
                let mut rdata = encode_name(mname);
                rdata.extend(encode_name(rname));
                for value in [serial, refresh, retry, expire, minimum] {
                    rdata.extend_from_slice(&value.to_be_bytes());
                }
                rdata
            }
        }
    }

    fn to_wire(&self) -> Vec<u8> {
        let rdata = self.rdata();
        let mut wire = match self {
            MockRecord::Owned { owner, .. } => encode_name(owner),
            // pointer to the question name
            _ => vec![0xc0, 0x0c],
        };
        wire.extend_from_slice(&self.type_code().to_be_bytes());
        wire.extend_from_slice(&[0x00, 0x01]);
        wire.extend_from_slice(&self.ttl().to_be_bytes());
        wire.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        wire.extend(rdata);
        wire
    }
}

/// What the mock answers to every query it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Answer { rcode: u8, records: Vec<MockRecord> },
    /// UDP replies are empty with TC set; the TCP listener carries the records.
    TruncatedUdp { records: Vec<MockRecord> },
    Silent,
    Garbage,
}

impl MockBehavior {
    pub fn records(records: Vec<MockRecord>) -> Self {
        MockBehavior::Answer {
            rcode: RCODE_NOERROR,
            records,
        }
    }

    pub fn rcode(rcode: u8) -> Self {
        MockBehavior::Answer {
            rcode,
            records: vec![],
        }
    }
}

pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    /// Binds UDP and TCP on the same ephemeral loopback port.
    pub async fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let (socket, listener) = Self::bind_pair().await?;
        let addr = socket.local_addr()?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_counter = udp_queries.clone();
        let tcp_counter = tcp_queries.clone();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::udp_response(&behavior, &buf[..len]) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            tcp_counter.fetch_add(1, Ordering::SeqCst);
                            let behavior = behavior.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = Self::tcp_response(&behavior, &query) {
                                    let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&response).await;
                                    let _ = stream.flush().await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    async fn bind_pair() -> Result<(UdpSocket, TcpListener), std::io::Error> {
        let mut last_error = None;
        for _ in 0..16 {
            let socket = UdpSocket::bind("127.0.0.1:0").await?;
            let addr = socket.local_addr()?;
            match TcpListener::bind(addr).await {
                Ok(listener) => return Ok((socket, listener)),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| std::io::Error::other("no free port pair")))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Address in the form accepted by the resolver's nameserver list.
    pub fn nameserver(&self) -> String {
        self.addr.to_string()
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    fn udp_response(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
        match behavior {
            MockBehavior::Answer { rcode, records } => {
                build_response(query, *rcode, records, false)
            }
            MockBehavior::TruncatedUdp { .. } => build_response(query, RCODE_NOERROR, &[], true),
            MockBehavior::Silent => None,
            MockBehavior::Garbage => {
                if query.len() < 2 {
                    return None;
                }
                Some(vec![query[0], query[1], 0x81, 0x80, 0xff])
            }
        }
    }

    fn tcp_response(behavior: &MockBehavior, query: &[u8]) -> Option<Vec<u8>> {
        match behavior {
            MockBehavior::Answer { rcode, records } => {
                build_response(query, *rcode, records, false)
            }
            MockBehavior::TruncatedUdp { records } => {
                build_response(query, RCODE_NOERROR, records, false)
            }
            MockBehavior::Silent | MockBehavior::Garbage => None,
        }
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Echo the query's ID and question, then append `records`.
pub fn build_response(
    query: &[u8],
    rcode: u8,
    records: &[MockRecord],
    truncated: bool,
) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }
    let question = question_section(&query[12..])?;

    let mut response = Vec::with_capacity(512);
    response.extend_from_slice(&query[0..2]);

    // QR=1, opcode QUERY, RD copied from the query
    let mut flags_hi = 0x80 | (query[2] & 0x01);
    if truncated {
        flags_hi |= 0x02;
    }
    response.push(flags_hi);
    // RA=1
    response.push(0x80 | (rcode & 0x0f));

    response.extend_from_slice(&[0x00, 0x01]);
    response.extend_from_slice(&(records.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    response.extend_from_slice(question);
    for record in records {
        response.extend(record.to_wire());
    }

    Some(response)
}

fn question_section(body: &[u8]) -> Option<&[u8]> {
    let mut pos = 0;
    loop {
        let len = *body.get(pos)? as usize;
        pos += 1;
        if len == 0 {
            break;
        }
        pos += len;
    }
    body.get(..pos + 4)
}

pub fn encode_name(name: &str) -> Vec<u8> {
    let mut wire = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        wire.push(label.len() as u8);
        wire.extend_from_slice(label.as_bytes());
    }
    wire.push(0);
    wire
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_query() -> Vec<u8> {
        let mut query = vec![
            0xab, 0xcd, 0x01, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        ];
        query.extend(encode_name("example.com"));
        query.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);
        query
    }

    #[test]
    fn test_mock_response_builder() {
        let response =
            build_response(&sample_query(), RCODE_NOERROR, &[MockRecord::a([1, 2, 3, 4], 60)], false)
                .unwrap();

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[2], 0x81);
        assert_eq!(response[7], 1, "one answer");
        assert_eq!(&response[response.len() - 4..], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_truncated_flag() {
        let response = build_response(&sample_query(), RCODE_NOERROR, &[], true).unwrap();
        assert_eq!(response[2] & 0x02, 0x02);
    }

    #[test]
    fn test_encode_name() {
        assert_eq!(
            encode_name("a.bc."),
            vec![1, b'a', 2, b'b', b'c', 0]
        );
    }
}
