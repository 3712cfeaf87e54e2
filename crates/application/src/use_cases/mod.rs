pub mod dns;

pub use dns::QueryDnsUseCase;
