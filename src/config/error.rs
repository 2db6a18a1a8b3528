//! Failures raised while loading `alarmctl` settings

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--config` or `ALARM_CONFIG_FILE` points at a missing file
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The merged sources do not deserialize into `Settings`
    #[error("Settings have an unexpected shape: {0}")]
    Shape(#[source] config::ConfigError),

    /// A setting was read but its value is rejected
    #[error("Invalid setting {field}: {message}")]
    Invalid { field: String, message: String },

    /// The file or environment could not be read or parsed
    #[error("Unable to read settings: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Dotted key of the rejected setting, for `Invalid` errors
    pub fn field(&self) -> Option<&str> {
        match self {
            ConfigError::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_names_path_once() {
        let err = ConfigError::FileNotFound(PathBuf::from("/etc/alarm/missing.toml"));
        assert_eq!(
            err.to_string(),
            "Configuration file not found: /etc/alarm/missing.toml"
        );
    }

    #[test]
    fn test_invalid_carries_field() {
        let err = ConfigError::invalid("http.timeout_seconds", "must be greater than 0");
        assert_eq!(err.field(), Some("http.timeout_seconds"));
        assert_eq!(
            err.to_string(),
            "Invalid setting http.timeout_seconds: must be greater than 0"
        );
    }
}
