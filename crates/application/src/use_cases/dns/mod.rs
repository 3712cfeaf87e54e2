pub mod query_dns;

pub use query_dns::QueryDnsUseCase;
