use std::error::Error;
use std::path::{Path, PathBuf};
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

pub const LOG_LEVEL_ENV: &str = "ORFPROFILE_LOG_LEVEL";

/// Default log directory: `~/.orfprofile/logs`
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".orfprofile")
        .join("logs")
}

/// Route all logging to a timestamped file under `log_dir`.
///
/// The terminal UI owns stdout, so nothing is ever logged there.
pub fn init_logging(log_dir: &Path) -> Result<PathBuf, Box<dyn Error>> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = log_dir.join(format!("orfprofile_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Map a user-facing level name onto an `env_logger` filter for this crate.
pub fn log_filter(level: &str) -> String {
    let level = level.trim().to_lowercase();
    let env_filter = match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => level.as_str(),
        _ => {
            eprintln!("Invalid log level '{level}', defaulting to 'info'");
            "info"
        }
    };

    format!("orfprofile={env_filter}")
}

/// Set `RUST_LOG` from `ORFPROFILE_LOG_LEVEL` (default `info`).
pub fn set_log_level() {
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| "info".to_string());
    std::env::set_var("RUST_LOG", log_filter(&level));
}

pub fn log_system_info() {
    info!("=== orfprofile starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Current working directory: {:?}", std::env::current_dir().unwrap_or_default());
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("ORFPROFILE_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

pub fn log_shutdown() {
    info!("=== orfprofile shutting down ===");
    info!("Terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log a fatal error and echo it to stderr, which outlives the terminal UI.
pub fn log_critical_error(error: &str, context: Option<&str>) {
    let message = match context {
        Some(ctx) => format!("CRITICAL ERROR [{ctx}]: {error}"),
        None => format!("CRITICAL ERROR: {error}"),
    };

    error!("{message}");
    eprintln!("[{}] {message}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logging_initialization() {
        let temp_dir = tempdir().unwrap();
        let log_dir = temp_dir.path().join("logs");

        let result = init_logging(&log_dir);
        assert!(result.is_ok());

        let log_file = result.unwrap();
        assert!(log_file.exists());
        assert!(log_file.starts_with(&log_dir));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter("DEBUG"), "orfprofile=debug");
        assert_eq!(log_filter(" warn "), "orfprofile=warn");
        assert_eq!(log_filter("loud"), "orfprofile=info");
    }
}
