pub mod blocking;
pub mod upstream;

pub use blocking::{BlockingResolver, ResolverSettings};
pub use upstream::UpstreamResolver;
