use dns_mcp_domain::Config;
use tokio::runtime::{Builder, Runtime};

/// Multi-threaded runtime whose blocking pool is the resolver worker pool.
pub fn build_runtime(config: &Config) -> anyhow::Result<Runtime> {
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .max_blocking_threads(config.resolver.max_workers)
        .thread_name("dns-mcp")
        .build()?;
    Ok(runtime)
}
