use clap::Parser;
use dns_mcp_api::{AppState, McpRouter};
use dns_mcp_domain::{CliOverrides, Config, HostOs, SERVERS_ENV_VAR};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dns-mcp")]
#[command(version)]
#[command(about = "DNS MCP Server - DNS lookups as an MCP tool over stdio")]
struct Cli {
    /// Upstream DNS servers to use (space-separated). If not provided, uses system default.
    #[arg(long, num_args = 0.., value_name = "ADDR")]
    dns_servers: Option<Vec<String>>,

    /// Port to run the MCP server on (default: 3000; accepted for compatibility, stdio is used)
    #[arg(long)]
    port: Option<i64>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_servers: cli.dns_servers,
        port: cli.port,
        log_level: cli.log_level,
    };
    let env_servers = std::env::var(SERVERS_ENV_VAR).ok();

    let config = bootstrap::load_config(
        cli.config.as_deref(),
        cli_overrides,
        env_servers.as_deref(),
    )?;

    bootstrap::init_logging(&config);

    let runtime = bootstrap::build_runtime(&config)?;
    runtime.block_on(run(config))
}

async fn run(config: Config) -> anyhow::Result<()> {
    let os = HostOs::current();

    info!("Starting DNS MCP Server v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config, os).await;

    info!(
        "Upstream DNS servers: {} (from {})",
        services.upstream_servers,
        services.upstream_source.as_str()
    );
    info!("Platform: {}", os);
    if os == HostOs::MacOs {
        info!("macOS DNS detection using scutil and networksetup commands");
    }
    info!(
        port = config.server.port,
        max_workers = config.resolver.max_workers,
        "Server settings"
    );

    let router = McpRouter::new(AppState::new(services.query_dns));
    server::serve_stdio(router).await?;

    info!("Server shutdown complete");
    Ok(())
}
