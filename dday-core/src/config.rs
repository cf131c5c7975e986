//! Global dday configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::collection::{CurrentSort, PastSort};
use crate::error::{DdayError, DdayResult};
use crate::format::StorageFormat;
use crate::store::EventStore;

static DEFAULT_DATA_FILE_NAME: &str = "dday_data.json";

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("dday").join(DEFAULT_DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE_NAME))
}

/// Global configuration at ~/.config/dday/config.toml
///
/// Every key can also be set from the environment with a `DDAY_` prefix,
/// e.g. `DDAY_DATA_FILE=~/events.csv`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DdayConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Explicit storage format; inferred from `data_file` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<StorageFormat>,

    #[serde(default)]
    pub default_sort: CurrentSort,

    #[serde(default)]
    pub default_past_sort: PastSort,
}

impl Default for DdayConfig {
    fn default() -> Self {
        DdayConfig {
            data_file: default_data_file(),
            format: None,
            default_sort: CurrentSort::default(),
            default_past_sort: PastSort::default(),
        }
    }
}

impl DdayConfig {
    pub fn config_path() -> DdayResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DdayError::Config("Could not determine config directory".into()))?
            .join("dday");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/dday/config.toml, writing a commented-out default on
    /// first run.
    pub fn load() -> DdayResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            if let Err(e) = Self::create_default_config(&config_path) {
                // Still usable with defaults
                log::warn!("{}", e);
            }
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file (missing is fine) plus `DDAY_*` overrides.
    pub fn load_from(path: &Path) -> DdayResult<Self> {
        let config: DdayConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("DDAY"))
            .build()
            .map_err(|e| DdayError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DdayError::Config(e.to_string()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn storage_format(&self) -> StorageFormat {
        self.format
            .unwrap_or_else(|| StorageFormat::from_path(&self.data_path()))
    }

    pub fn store(&self) -> EventStore {
        EventStore::new(self.data_path(), self.storage_format())
    }

    /// Effective configuration as TOML.
    pub fn to_toml(&self) -> DdayResult<String> {
        toml::to_string_pretty(self).map_err(|e| DdayError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DdayResult<()> {
        let contents = format!(
            "\
# dday configuration

# Where your events are stored (.csv for one-line-per-event files):
# data_file = \"{}\"

# Storage format, \"json\" or \"csv\" (default: from the file extension):
# format = \"json\"

# Order of upcoming events, \"urgency\" or \"name\":
# default_sort = \"urgency\"

# Order of past events, \"date\" or \"name\":
# default_past_sort = \"date\"
",
            default_data_file().display()
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DdayError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DdayError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
