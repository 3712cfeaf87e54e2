pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use forwarding::{DnsResponse, MessageBuilder, PreparedQuery, RecordTypeMapper, ResponseParser};
pub use resolver::{BlockingResolver, ResolverSettings, UpstreamResolver};
pub use transport::{DnsTransport, TcpTransport, UdpTransport};
