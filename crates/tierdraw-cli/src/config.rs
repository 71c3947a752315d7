//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use tierdraw::{TierdrawError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for TierdrawError {
    fn from(err: ConfigError) -> Self {
        TierdrawError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (tierdraw/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// Whatever configuration is found is validated before it is returned.
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - The layout section has non-positive or non-finite values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TierdrawError> {
    let config = find_config(explicit_path)?;

    config
        .layout()
        .validate()
        .map_err(ConfigError::Validation)?;

    Ok(config)
}

fn find_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TierdrawError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("tierdraw/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "tierdraw", "tierdraw") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, TierdrawError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let file = config_file(
            r#"
            [layout]
            box_width = 160.0
            center_x = 800.0

            [document]
            page_name = "Production"
            "#,
        );

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.layout().box_width(), 160.0);
        assert_eq!(config.layout().center_x(), 800.0);
        assert_eq!(config.layout().box_height(), 80.0);
        assert_eq!(config.document().page_name(), "Production");
        assert_eq!(config.document().agent(), "tierdraw");
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempfile::tempdir().unwrap();

        let err = load_config(Some(dir.path().join("nope.toml"))).unwrap_err();

        match err {
            TierdrawError::Config(message) => {
                assert!(message.starts_with("Missing configuration file"));
            }
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_config() {
        let file = config_file("[layout\nbox_width = ");

        let err = load_config(Some(file.path())).unwrap_err();

        assert!(matches!(err, TierdrawError::Config(message) if message.starts_with("Failed to parse")));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let file = config_file("[layout]\nhorizontal_pitch = -10.0\n");

        let err = load_config(Some(file.path())).unwrap_err();

        match err {
            TierdrawError::Config(message) => {
                assert!(message.contains("layout.horizontal_pitch"), "{message}");
            }
            other => panic!("expected a config error, got {other:?}"),
        }
    }
}
