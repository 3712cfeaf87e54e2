pub mod host_probe;

pub use host_probe::HostSystemProbe;
