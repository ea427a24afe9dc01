use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::game::{Player, COLS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayerConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Display names for the two sides. The engine only knows Red and Blue.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub red_name: String,
    pub blue_name: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            red_name: Player::Red.name().to_string(),
            blue_name: Player::Blue.name().to_string(),
        }
    }
}

impl PlayerConfig {
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::Red => &self.red_name,
            Player::Blue => &self.blue_name,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for input before redrawing
    pub poll_interval_ms: u64,
    /// Column the cursor starts on
    pub start_column: usize,
    /// Capture the mouse so a click drops into the clicked column
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            start_column: 3,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "connect_four=debug"
    pub filter: String,
    /// Log destination. The TUI owns the terminal, so without a file nothing
    /// is logged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let red = self.players.red_name.trim();
        let blue = self.players.blue_name.trim();
        if red.is_empty() || blue.is_empty() {
            return Err(ConfigError::Validation(
                "players.red_name and players.blue_name must not be empty".into(),
            ));
        }
        if red == blue {
            return Err(ConfigError::Validation(
                "players.red_name and players.blue_name must differ".into(),
            ));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.filter must not be empty".into(),
            ));
        }
        crate::logging::build_filter(&self.logging.filter)
            .map_err(|e| ConfigError::Validation(format!("logging.filter: {e}")))?;
        Ok(())
    }

    /// Serialize the defaults, for `--print-default-config`.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[players]
red_name = "Alice"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.players.red_name, "Alice");
        // Other fields should be defaults
        assert_eq!(config.players.blue_name, "Blue");
        assert_eq!(config.ui.poll_interval_ms, 100);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_name_of() {
        let players = PlayerConfig {
            red_name: "Alice".into(),
            blue_name: "Bob".into(),
        };
        assert_eq!(players.name_of(Player::Red), "Alice");
        assert_eq!(players.name_of(Player::Blue), "Bob");
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut config = AppConfig::default();
        config.players.blue_name = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_duplicate_names() {
        let mut config = AppConfig::default();
        config.players.blue_name = "Red".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_poll_interval() {
        let mut config = AppConfig::default();
        config.ui.poll_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_start_column_out_of_range() {
        let mut config = AppConfig::default();
        config.ui.start_column = COLS;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_filter() {
        let mut config = AppConfig::default();
        config.logging.filter = "connect_four=loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.ui.start_column, 3);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
start_column = 0
mouse = false

[logging]
filter = "debug"
file = "game.log"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.start_column, 0);
        assert!(!config.ui.mouse);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.logging.file, Some(PathBuf::from("game.log")));
        // Others are defaults
        assert_eq!(config.players.red_name, "Red");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\nstart_column = 12\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let err = AppConfig::load(Path::new("definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
