mod dns_resolver;
mod system_probe;

pub use dns_resolver::DnsResolver;
pub use system_probe::SystemProbe;

// Re-export for convenience
pub use dns_mcp_domain::{DnsAnswer, DnsQuery};
