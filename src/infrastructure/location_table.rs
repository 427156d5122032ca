// src/infrastructure/location_table.rs
//
// Postal code → GeoLocation resolution
//
// RULES:
// - The table is read-only once loaded
// - An unknown postal code is a user-input problem, never a system fault
// - Lookups never touch the file system

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::{GeoLocation, PostalCode};
use crate::error::{AppError, AppResult};

pub const DEFAULT_LOCATION_TABLE_PATH: &str = "data/postalCodes.json";

/// Resolves postal codes into locations
#[cfg_attr(test, mockall::automock)]
pub trait LocationLookup: Send + Sync {
    fn find(&self, postal_code: &PostalCode) -> Option<GeoLocation>;
}

/// Resolve or fail with a user-facing message
pub fn resolve_location(
    lookup: &dyn LocationLookup,
    postal_code: &PostalCode,
) -> AppResult<GeoLocation> {
    lookup.find(postal_code).ok_or_else(|| {
        AppError::invalid_input(format!("Unknown postal code: {}", postal_code))
    })
}

/// One row of the location table file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationEntry {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Static table loaded from `{ "<postal code>": {address, latitude, longitude} }`
#[derive(Debug, Clone, Default)]
pub struct JsonLocationTable {
    entries: HashMap<String, LocationEntry>,
}

impl JsonLocationTable {
    pub fn from_entries(entries: HashMap<String, LocationEntry>) -> Self {
        Self { entries }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let entries: HashMap<String, LocationEntry> =
            serde_json::from_str(&content).map_err(|e| {
                AppError::data_loading(format!(
                    "Location table {} is malformed: {}",
                    path.display(),
                    e
                ))
            })?;
        info!("Loaded {} postal codes from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LocationLookup for JsonLocationTable {
    fn find(&self, postal_code: &PostalCode) -> Option<GeoLocation> {
        self.entries.get(postal_code.as_str()).map(|entry| {
            GeoLocation::new(
                postal_code.to_string(),
                entry.address.clone(),
                entry.latitude,
                entry.longitude,
            )
        })
    }
}
