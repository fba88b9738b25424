//! Server initialization and startup logic for deskpilot.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use deskpilot_api::{InterfaceConfig, InterfaceServer};
use deskpilot_config::{ComputerConfig, Config, ConfigValidator, LoggingConfig};
use deskpilot_tools_computer::{ComputerSettings, ComputerUseTool, LocalComputer, TextEntryTimings};

/// Initialize tracing with console output and, when enabled, a daily log file.
///
/// `RUST_LOG` takes precedence over `logging.level`. Console output goes to stderr so
/// `exec` can print results on stdout.
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;

    let file_layer = if logging.file {
        let log_dir = logging.resolved_log_dir();
        std::fs::create_dir_all(&log_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("deskpilot")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the writer alive for the life of the process.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(true)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}

/// Map `[computer]` config onto the tool's settings.
pub(crate) fn computer_settings(config: &ComputerConfig) -> ComputerSettings {
    ComputerSettings {
        text_entry: TextEntryTimings {
            char_interval: Duration::from_millis(config.type_interval_ms),
            clipboard_settle: Duration::from_millis(config.clipboard_settle_ms),
        },
        drag_interval: Duration::from_millis(config.drag_interval_ms),
        ..ComputerSettings::default()
    }
}

pub(crate) fn computer_tool(config: &Config) -> ComputerUseTool {
    let computer = LocalComputer::new(computer_settings(&config.computer));
    ComputerUseTool::new(Arc::new(computer))
}

/// Log validation warnings; fail on errors.
pub(crate) fn check_config(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let result = ConfigValidator::validate(config);
    for warning in &result.warnings {
        warn!("Config warning at {}: {}", warning.path, warning.message);
    }
    if !result.is_valid() {
        for err in &result.errors {
            error!("Config error at {}: {}", err.path, err.message);
        }
        return Err(format!("{} configuration error(s)", result.errors.len()).into());
    }
    Ok(())
}

/// Run the server in foreground until Ctrl+C.
pub(crate) async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    check_config(&config)?;

    info!("Starting deskpilot v{}", env!("CARGO_PKG_VERSION"));

    let tool = computer_tool(&config);
    info!(
        actions = tool.builder().actions().len(),
        "Computer tool ready"
    );

    let server = InterfaceServer::new(
        InterfaceConfig::new(config.server.host.clone(), config.server.port),
        Arc::new(tool),
    );

    tokio::select! {
        result = server.run() => result?,
        _ = tokio::signal::ctrl_c() => info!("Received Ctrl+C, shutting down"),
    }

    Ok(())
}
