use derive_more::{Display, Error, From};
use elmock_elm327_lib::LineSettings;
use log::{debug, info, LevelFilter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configurable log level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub const fn as_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:35000".to_string()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the TCP listener binds to
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Echo received characters back (ELM327 default after reset)
    #[serde(default = "default_true")]
    pub echo: bool,
    /// Terminate lines with CR LF instead of a bare CR
    #[serde(default = "default_true")]
    pub linefeeds: bool,
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            echo: true,
            linefeeds: true,
            log_level: LogLevel::default(),
        }
    }
}

#[derive(Debug, Display, Error, From)]
pub enum ConfigError {
    #[display("cannot read config file: {_0}")]
    Io(std::io::Error),
    #[display("invalid config file: {_0}")]
    Parse(serde_json::Error),
}

impl ServerConfig {
    /// Load from a JSON file. Missing fields fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub const fn line_settings(&self) -> LineSettings {
        LineSettings {
            echo_enabled: self.echo,
            linefeeds_enabled: self.linefeeds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ServerConfig::from_json("{}").unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.listen, "0.0.0.0:35000");
        assert_eq!(config.line_settings(), LineSettings::default());
    }

    #[test]
    fn test_partial_json() {
        let config =
            ServerConfig::from_json(r#"{"echo": false, "log_level": "debug"}"#).unwrap();
        assert!(!config.echo);
        assert!(config.linefeeds);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_level.as_level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_json_rejected() {
        assert!(ServerConfig::from_json(r#"{"echo": "yes"}"#).is_err());
        assert!(ServerConfig::from_json(r#"{"log_level": "loud"}"#).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let config = ServerConfig {
            listen: "127.0.0.1:35001".to_string(),
            echo: false,
            linefeeds: false,
            log_level: LogLevel::Warn,
        };
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(ServerConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::load(Path::new("/nonexistent/elmock.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("cannot read config file"));
    }
}
