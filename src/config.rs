// src/config.rs
//
// Application configuration: where each data file lives.
// A missing config file means "use the defaults".

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_REGISTRY_PATH;
use crate::error::{AppError, AppResult};
use crate::infrastructure::DEFAULT_LOCATION_TABLE_PATH;
use crate::repositories::DEFAULT_ADDRESS_BOOK_PATH;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub address_book_path: PathBuf,
    pub sport_registry_path: PathBuf,
    pub location_table_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address_book_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_PATH),
            sport_registry_path: PathBuf::from(DEFAULT_REGISTRY_PATH),
            location_table_path: PathBuf::from(DEFAULT_LOCATION_TABLE_PATH),
        }
    }
}

impl AppConfig {
    pub fn load_or_default(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            AppError::data_loading(format!("Config file {} is malformed: {}", path.display(), e))
        })
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
