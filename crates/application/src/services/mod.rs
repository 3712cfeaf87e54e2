pub mod nameserver_discovery;

pub use nameserver_discovery::NameserverDiscovery;
