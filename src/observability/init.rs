//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default log file name inside the data directory.
const LOG_FILE_NAME: &str = "whispr.log";

/// Initializes the global tracing subscriber with rotating file output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently gives up if the directory cannot be created (logging is optional)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let log_file = log_path(config);
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer);

    let _ = subscriber.try_init();
}

fn log_path(config: &Config) -> PathBuf {
    config.log_file.as_deref().map_or_else(
        || crate::infrastructure::get_data_dir().join(LOG_FILE_NAME),
        |path| PathBuf::from(crate::infrastructure::expand_tilde(path)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_file_wins() {
        let config = Config {
            log_file: Some("/tmp/whispr-test/dash.log".to_string()),
            ..Config::default()
        };
        assert_eq!(log_path(&config), PathBuf::from("/tmp/whispr-test/dash.log"));
    }

    #[test]
    fn default_log_file_lives_in_data_dir() {
        let path = log_path(&Config::default());
        assert!(path.ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            log_file: Some(dir.path().join("dash.log").to_string_lossy().into_owned()),
            trace_level: Some("debug".to_string()),
            ..Config::default()
        };
        init_tracing(&config);
        init_tracing(&config);
        tracing::info!("after init");
    }
}
