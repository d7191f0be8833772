use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "TODOMD_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// `~/.config/todomd`, falling back to `./.todomd` without a home directory
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".config").join("todomd"))
        .unwrap_or_else(|| PathBuf::from(".todomd"))
}

/// The config file path, honoring `TODOMD_CONFIG`
pub fn config_path() -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => config_dir().join("config.toml"),
    }
}

/// Read a config file. A missing file yields the defaults.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the user config, warning on stderr and using defaults if it is broken
pub fn load_config() -> Config {
    match read_config(&config_path()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("warning: {}", e);
            Config::default()
        }
    }
}
