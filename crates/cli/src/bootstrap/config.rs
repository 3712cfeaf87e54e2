use dns_mcp_domain::{CliOverrides, Config};

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
    env_servers: Option<&str>,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides, env_servers)?;
    config.validate()?;
    Ok(config)
}
