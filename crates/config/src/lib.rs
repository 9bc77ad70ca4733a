//! Configuration directory handling for the board client
//!
//! Provides utilities for loading and saving JSON files in the client's
//! config directory (~/.config/bbs/), which holds the persisted session.
//!
//! Call [`init`] at application startup to bootstrap the config directory.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Initialize the config directory.
///
/// Creates ~/.config/bbs/ if it doesn't exist.
/// Call this once at application startup.
pub fn init() -> Result<PathBuf> {
    ensure_config_dir()
}

/// Get the client config directory (~/.config/bbs/)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("bbs"))
}

/// Get the path to a file within the config directory
pub fn config_path(filename: &str) -> Option<PathBuf> {
    config_dir().map(|p| p.join(filename))
}

/// Load and parse a JSON file from the config directory
pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<T> {
    let path = config_path(filename).context("Could not determine config directory")?;
    load_json_file(&path)
}

/// Load and parse a JSON file from an arbitrary path
pub fn load_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Check if a file exists in the config directory
pub fn config_exists(filename: &str) -> bool {
    config_path(filename).is_some_and(|p| p.exists())
}

/// Ensure the config directory exists
pub fn ensure_config_dir() -> Result<PathBuf> {
    let dir = config_dir().context("Could not determine config directory")?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
    Ok(dir)
}

/// Save a value as JSON to a file in the config directory
pub fn save_json<T: serde::Serialize>(filename: &str, value: &T) -> Result<()> {
    let dir = ensure_config_dir()?;
    let path = dir.join(filename);
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    Ok(())
}

/// Remove a file from the config directory if it exists
pub fn remove(filename: &str) -> Result<()> {
    let path = config_path(filename).context("Could not determine config directory")?;
    if path.exists() {
        std::fs::remove_file(&path)
            .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[test]
    fn test_config_dir() {
        let dir = config_dir();
        assert!(dir.is_some());
        assert!(dir.unwrap().ends_with("bbs"));
    }

    #[test]
    fn test_config_path() {
        let path = config_path("session.json");
        assert!(path.is_some());
        assert!(path.unwrap().ends_with("bbs/session.json"));
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        value: i32,
    }

    #[test]
    fn test_load_json_file_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sample.json");
        std::fs::write(&path, r#"{"value": 42}"#).unwrap();

        let loaded: Sample = load_json_file(&path).unwrap();
        assert_eq!(loaded, Sample { value: 42 });
    }

    #[test]
    fn test_load_json_file_missing_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result: Result<Sample> = load_json_file(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_json_file_invalid_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "not json").unwrap();

        let result: Result<Sample> = load_json_file(&path);
        assert!(result.is_err());
    }
}
