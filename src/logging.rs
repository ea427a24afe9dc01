//! Log output for the game. The terminal belongs to the UI, so events go to a
//! file or nowhere.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::LoggingError;

/// Parse an `EnvFilter` directive string.
pub fn build_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter).map_err(|e| LoggingError::Filter {
        filter: filter.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured filter. Returns `false` when no log file is configured and
/// nothing was installed.
pub fn init(config: &LoggingConfig) -> Result<bool, LoggingError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&config.filter)?,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LoggingError::LogFile {
            path: path.clone(),
            source: e,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LoggingError::Subscriber(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("connect_four=debug,warn").is_ok());
    }

    #[test]
    fn test_build_filter_rejects_bad_level() {
        let err = build_filter("connect_four=loud").unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }

    #[test]
    fn test_init_without_file_is_noop() {
        let config = LoggingConfig::default();
        assert!(!init(&config).unwrap());
    }

    #[test]
    fn test_init_reports_unopenable_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            filter: "info".into(),
            file: Some(dir.path().join("missing").join("game.log")),
        };
        let err = init(&config).unwrap_err();
        assert!(matches!(err, LoggingError::LogFile { .. }));
    }
}
