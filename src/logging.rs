use crate::cli::Args;
use geoguessr_api::constants::LOG_FILE_NAME;
use geoguessr_api::{AppError, Config};
use std::io::stderr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "geoguessr_api=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into its directory and file name, falling back to
/// the default location.
fn resolve_log_target(custom_path: Option<&String>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging for the command-line tool.
///
/// Logs always go to a daily rolling file. With `--debug` they are also
/// echoed to stderr, keeping stdout free for JSON output.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(
    args: &Args,
    config: Option<&Config>,
) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = config.and_then(|c| c.log_file_path.as_ref());
    let custom_log_path = args.log_file.as_ref().or(config_log_path);
    let (log_dir, log_file_name) = resolve_log_target(custom_log_path);

    if !Path::new(&log_dir).exists() {
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard flushes buffered lines when dropped.
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stderr_filter = env_filter()?;
    let stderr_layer = args.debug.then(|| {
        fmt::Layer::new()
            .with_writer(stderr)
            .with_ansi(true)
            .with_filter(stderr_filter)
    });

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter()?),
        )
        .try_init()
        .map_err(|e| AppError::log_setup_error(e.to_string()))?;

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
