use color_eyre::eyre::{eyre, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const CONFIG_DIR: &str = ".config";
const APP_CONFIG_DIR: &str = "constraint-tui";

const DEFAULT_TICK_RATE_MS: u64 = 200;

/// Optional user settings for the viewer chrome. The page content and theme
/// tokens are compile-time constants and are deliberately not configurable.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub tick_rate_ms: u64,
    pub show_logs: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            show_logs: false,
        }
    }
}

impl UserConfig {
    /// Load the config file if it exists; otherwise fall back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if path.exists() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let config_string = fs::read_to_string(path)?;
        let config: UserConfig = serde_yaml::from_str(&config_string)?;
        Ok(config)
    }

    fn config_file_path() -> Result<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(Path::new(&home)
                .join(CONFIG_DIR)
                .join(APP_CONFIG_DIR)
                .join(FILE_NAME)),
            None => Err(eyre!("No $HOME directory found for config")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parses_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms: 100\nshow_logs: true").unwrap();
        let config = UserConfig::from_file(file.path()).unwrap();
        assert_eq!(config.tick_rate_ms, 100);
        assert!(config.show_logs);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "show_logs: true").unwrap();
        let config = UserConfig::from_file(file.path()).unwrap();
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(config.show_logs);
    }

    #[test]
    fn garbage_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "tick_rate_ms: [not a number").unwrap();
        assert!(UserConfig::from_file(file.path()).is_err());
    }
}
