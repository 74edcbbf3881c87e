//! Settings resolution: command-line flags, environment variables,
//! then the config file, then built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli_types::Cli;
use crate::error::CliError;

const CONFIG_DIR: &str = "game-shelf";
const CONFIG_FILE: &str = "config.toml";

const ENV_DATA_DIR: &str = "GAME_SHELF_DATA_DIR";
const ENV_BASE_URL: &str = "GAME_SHELF_BASE_URL";

/// On-disk config file shape. All fields optional; anything absent
/// falls through to the next source.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    data_dir: Option<PathBuf>,
    base_url: Option<String>,
}

/// Fully resolved settings for one invocation.
#[derive(Debug)]
pub(crate) struct Settings {
    pub data_dir: PathBuf,
    pub base_url: Option<String>,
}

impl Settings {
    /// Resolve settings with flag > environment > file > default
    /// precedence.
    pub fn resolve(cli: &Cli) -> Result<Self, CliError> {
        let file = match config_path() {
            Some(path) if path.is_file() => read_config(&path)?,
            _ => SettingsFile::default(),
        };

        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| std::env::var_os(ENV_DATA_DIR).map(PathBuf::from))
            .or(file.data_dir)
            .or_else(default_data_dir)
            .ok_or_else(|| CliError::config("could not determine a data directory"))?;

        let base_url = cli
            .base_url
            .clone()
            .or_else(|| std::env::var(ENV_BASE_URL).ok())
            .or(file.base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Ok(Self { data_dir, base_url })
    }
}

/// Platform config file location, e.g. `~/.config/game-shelf/config.toml`.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(CONFIG_DIR))
}

fn read_config(path: &Path) -> Result<SettingsFile, CliError> {
    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents)
        .map_err(|e| CliError::config(format!("invalid config at {}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_file_parses_partial_fields() {
        let file: SettingsFile = toml::from_str("base_url = \"https://example.com/data/\"")
            .expect("valid toml");
        assert_eq!(file.base_url.as_deref(), Some("https://example.com/data/"));
        assert!(file.data_dir.is_none());
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let file: SettingsFile = toml::from_str("").expect("valid toml");
        assert!(file.base_url.is_none());
        assert!(file.data_dir.is_none());
    }
}
