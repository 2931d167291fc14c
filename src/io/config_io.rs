use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for loading config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid seed entry #{index}: {reason}")]
    InvalidSeed { index: usize, reason: &'static str },
}

/// A parsed config plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// The file that was (or would have been) read
    pub path: PathBuf,
    /// False when no file existed and defaults are in use
    pub from_file: bool,
}

impl LoadedConfig {
    /// Directory for log files: `[log] dir`, else `logs/` beside the config file
    pub fn log_dir(&self) -> PathBuf {
        match &self.config.log.dir {
            Some(dir) => dir.clone(),
            None => self
                .path
                .parent()
                .map(|p| p.join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs")),
        }
    }
}

/// Default config location, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    config_path_from(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn config_path_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| home.unwrap_or_else(|| PathBuf::from("/")).join(".config"));
    config_dir.join("todos").join("config.toml")
}

/// Load config from `explicit`, or from the default location.
///
/// An explicit path must exist. A missing file at the default location falls
/// back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match explicit {
        Some(p) => load_from(p.to_path_buf(), true),
        None => load_from(config_path(), false),
    }
}

fn load_from(path: PathBuf, required: bool) -> Result<LoadedConfig, ConfigError> {
    if !required && !path.exists() {
        return Ok(LoadedConfig {
            config: Config::default(),
            path,
            from_file: false,
        });
    }

    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config = parse_config(&text)?;
    Ok(LoadedConfig {
        config,
        path,
        from_file: true,
    })
}

/// Parse and validate config text
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text)?;
    if let Some(seed) = &config.seed {
        for (index, item) in seed.iter().enumerate() {
            if item.key.is_empty() {
                return Err(ConfigError::InvalidSeed {
                    index,
                    reason: "empty key",
                });
            }
            if item.category.is_empty() {
                return Err(ConfigError::InvalidSeed {
                    index,
                    reason: "empty category",
                });
            }
        }
    }
    Ok(config)
}
