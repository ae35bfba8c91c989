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

use rstviz::{RstVizError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for RstVizError {
    fn from(err: ConfigError) -> Self {
        RstVizError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (rstviz/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, RstVizError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("rstviz/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("org", "rstviz", "rstviz") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(
                path = system_config.display().to_string();
                "Loading configuration from system path"
            );
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, RstVizError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content).map_err(|message| {
        ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        }
        .into()
    })
}

fn parse_config(content: &str) -> Result<AppConfig, String> {
    let config: AppConfig = toml::from_str(content).map_err(|err| err.to_string())?;
    // Reject invalid colors and graph names before any input is read.
    config.style().theme()?;
    config.graph().validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r##"
            [highlight]
            relation = "elaboration"

            [style]
            image_fill_color = "#ffeeaa"
            normal_font_size = 12
            wrap_width = 20

            [graph]
            name = "poster"
            "##,
        )
        .unwrap();

        assert_eq!(config.highlight().relation(), "elaboration");
        assert_eq!(config.style().wrap_width(), 20);
        assert_eq!(config.graph().name(), "poster");
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config("").unwrap();

        assert_eq!(config.highlight().relation(), "");
        assert_eq!(config.graph().name(), "rst");
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(parse_config("[style\nwrap_width = 3").is_err());
    }

    #[test]
    fn test_parse_invalid_color() {
        let err = parse_config("[style]\ntext_fill_color = \"nope\"").unwrap_err();
        assert!(err.contains("text_fill_color"));
    }

    #[test]
    fn test_parse_invalid_graph_name() {
        let err = parse_config("[graph]\nname = 'a\"b'").unwrap_err();
        assert!(err.contains("name"));
    }

    #[test]
    fn test_explicit_path_missing() {
        let dir = tempdir().unwrap();
        let err = load_config(Some(dir.path().join("missing.toml"))).unwrap_err();

        assert!(matches!(err, RstVizError::Config(_)));
    }

    #[test]
    fn test_explicit_path_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[highlight]\nrelation = \"joint\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.highlight().relation(), "joint");
    }
}
