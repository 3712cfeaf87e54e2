mod stub_resolver;

pub use stub_resolver::*;
