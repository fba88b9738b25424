//! CLI definitions for deskpilot.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// deskpilot CLI.
#[derive(Parser)]
#[command(name = "deskpilot")]
#[command(about = "Computer-use tool server: mouse, keyboard, text entry, screenshots")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (default: ~/.deskpilot/config.toml, optional)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the HTTP server in foreground (default)
    Run {
        /// Server host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Run a single action and print its result as JSON
    Exec {
        /// Action name, e.g. move_mouse or MoveMouse
        action: String,

        /// Action parameter as KEY=VALUE, e.g. --param PositionX=10 (repeatable)
        #[arg(short, long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
    },

    /// List supported actions
    Actions,
}
