//! Configuration file handling.
//!
//! The configuration is a small JSON document in the platform data directory
//! (see [`DataStorage`]):
//!
//! ```json
//! {
//!   "redmine": {
//!     "api_url": "https://redmine.example.com",
//!     "api_key": "0123456789abcdef"
//!   }
//! }
//! ```
//!
//! `api_key` is optional. Without it the key is taken from `REDMINE_API_KEY`
//! or asked for once and cached encrypted (see [`crate::libs::secret`]).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rlw::libs::config::Config;
//!
//! let config = Config::read()?;
//! let redmine = config.redmine()?;
//! println!("Redmine URL: {}", redmine.api_url);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::error::Error;
use crate::api::redmine::RedmineConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redmine: Option<RedmineConfig>,
}

impl Config {
    /// Location of the configuration file.
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration, or the default one if no file exists yet.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// The tracker section, which every tracker command needs.
    pub fn redmine(&self) -> Result<&RedmineConfig, Error> {
        self.redmine.as_ref().ok_or(Error::NotConfigured)
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        config.redmine = Some(RedmineConfig::init(&config.redmine)?);
        Ok(config)
    }
}
