//! deskpilot - computer-use tool server
//!
//! Main entry point for the deskpilot CLI and server.

mod cli;
mod cmd_exec;
mod server;

use std::path::Path;

use clap::Parser;

use deskpilot_config::{deskpilot_dir, Config, ConfigLoader};

use cli::{Cli, Commands};

fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(&deskpilot_dir().join("config.toml"))?,
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;

    server::init_tracing(&config.logging)?;

    match cli.command {
        None => server::run_server(config).await,
        Some(Commands::Run { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            server::run_server(config).await
        }
        Some(Commands::Exec { action, params }) => cmd_exec::run_exec(config, action, params).await,
        Some(Commands::Actions) => {
            cmd_exec::list_actions();
            Ok(())
        }
    }
}
