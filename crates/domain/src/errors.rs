use thiserror::Error;

/// Failures surfaced by resolution and host inspection.
///
/// The `Display` text of each resolution variant is exactly what callers see
/// in `QueryResult.error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Domain does not exist (NXDOMAIN)")]
    NxDomain,

    #[error("No {0} record found")]
    NoAnswer(String),

    #[error("DNS query timeout")]
    QueryTimeout,

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("DNS metaqueries are not allowed: {0}")]
    MetaQuery(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("All nameservers failed to answer the query {0}")]
    AllNameserversFailed(String),

    #[error("Timeout waiting for response from {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {message}")]
    Transport { server: String, message: String },

    #[error("No usable nameservers configured")]
    NoUsableNameservers,

    #[error("Resolver worker unavailable: {0}")]
    ResolverUnavailable(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Command timed out: {0}")]
    CommandTimeout(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
