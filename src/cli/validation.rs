//! CLI argument validation functions

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("alarm.toml");
        fs::write(&path, "").unwrap();

        let validated = validate_config_file_path(path.to_str().unwrap()).unwrap();
        assert_eq!(validated, path);
    }

    #[test]
    fn test_missing_file_rejected() {
        let err = validate_config_file_path("/nonexistent/alarm.toml").unwrap_err();
        assert!(err.contains("does not exist"));
    }

    #[test]
    fn test_directory_rejected() {
        let dir = TempDir::new().unwrap();
        let err = validate_config_file_path(dir.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not a file"));
    }
}
