use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DATA_DIR_ENV: &str = "TADOKU_DATA_DIR";
pub const LOG_ENV: &str = "TADOKU_LOG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub cache_file: String,
    pub log_level: String,
}

// On-disk shape; every field optional.
#[derive(Deserialize, Debug, Default)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    cache_file: Option<String>,
    log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().unwrap_or_else(|_| PathBuf::from(".tadoku")),
            cache_file: "cache.json".to_string(),
            log_level: "info".to_string(),
        }
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
    Ok(home_dir.join(".tadoku"))
}

impl Config {
    /// Loads `config.json` from the data directory, then applies environment overrides.
    pub fn load() -> Result<Self> {
        let data_dir = match env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        let mut config = Self::from_dir(&data_dir)?;
        config.apply_overrides(|name| env::var(name).ok());
        Ok(config)
    }

    /// Reads `config.json` under `dir` if present. Missing fields take defaults,
    /// and the data directory defaults to `dir` itself.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        let file = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str::<ConfigFile>(&content)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        } else {
            ConfigFile::default()
        };

        let defaults = Config::default();
        Ok(Self {
            data_dir: file.data_dir.unwrap_or_else(|| dir.to_path_buf()),
            cache_file: file.cache_file.unwrap_or(defaults.cache_file),
            log_level: file.log_level.unwrap_or(defaults.log_level),
        })
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(LOG_ENV).filter(|l| !l.is_empty()) {
            self.log_level = level;
        }
    }
}
