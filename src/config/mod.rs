use crate::core::coerce::CoercionPolicy;
use crate::errors::{AppError, AppResult};
use crate::models::driver::DriverRoster;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub mod check;

/// How dates are labelled in terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateLabels {
    /// "miércoles 1 mayo 2024"
    #[default]
    Es,
    /// "2024-05-01"
    Iso,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub store: String,
    #[serde(default = "default_drivers")]
    pub drivers: Vec<String>,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default)]
    pub input_policy: CoercionPolicy,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub date_labels: DateLabels,
}

fn default_drivers() -> Vec<String> {
    vec!["JORGE".to_string(), "ERIK".to_string()]
}
fn default_cache_ttl() -> u64 {
    15
}
fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            drivers: default_drivers(),
            cache_ttl_secs: default_cache_ttl(),
            input_policy: CoercionPolicy::default(),
            currency_symbol: default_currency_symbol(),
            date_labels: DateLabels::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("taxiledger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".taxiledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("taxiledger.conf")
    }

    /// Default location of the ledger sheet
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("taxiledger.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Build the configuration for `init`: the existing file (or defaults)
    /// plus an optional store path. The file is written unless `is_test`.
    pub fn init_all(custom_store: Option<&str>, is_test: bool) -> AppResult<Self> {
        let mut cfg = Self::load()?;

        if let Some(name) = custom_store {
            cfg.store = expand_tilde(name).to_string_lossy().to_string();
        }

        if !is_test {
            cfg.save()?;
        }

        Ok(cfg)
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    pub fn roster(&self) -> AppResult<DriverRoster> {
        let roster = DriverRoster::new(&self.drivers);
        if roster.is_empty() {
            return Err(AppError::Config(
                "`drivers` must list at least one driver".into(),
            ));
        }
        Ok(roster)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
