pub mod config;
pub mod logging;
pub mod runtime;

pub use config::load_config;
pub use logging::init_logging;
pub use runtime::build_runtime;
