pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;
pub mod upstream;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
pub use server::ServerConfig;
pub use upstream::{UpstreamConfig, UpstreamSource, SERVERS_ENV_VAR};
