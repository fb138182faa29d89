use std::process::exit;

use daynight::{
    Playground,
    config::Config,
    error::ConfigError,
};
use tracing_subscriber::EnvFilter;

/// Create a new Config and call the Playground API.
fn main() {
    let cfg = match Config::new(std::env::args_os()) {
        Ok(cfg) => cfg,
        Err(ConfigError::Cli(e)) => e.exit(),
    };

    let level = if cfg.verbose { "daynight=debug" } else { "daynight=info" };
    let filter = EnvFilter::from_default_env();
    let filter = match level.parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = Playground::new_with_cfg(cfg).run() {
        tracing::error!("{}", e);
        exit(1);
    }
}
