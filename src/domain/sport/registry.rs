// src/domain/sport/registry.rs
//
// Session-wide set of recognized sport names.
//
// RULES:
// - Names are stored lowercase and trimmed
// - The registry is an owned value handed to whoever needs it (no global state)
// - Deleting a sport must never leave a person without sports
// - Load replaces the whole set, it never merges

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::domain::person::Person;
use crate::domain::sport::Sport;
use crate::domain::{DomainError, DomainResult};
use crate::error::{AppError, AppResult};

/// Built-in sports available before any file has been loaded
pub const DEFAULT_SPORTS: &[&str] = &[
    "badminton",
    "basketball",
    "cricket",
    "football",
    "golf",
    "hockey",
    "rugby",
    "running",
    "squash",
    "swimming",
    "tennis",
    "volleyball",
];

pub const DEFAULT_REGISTRY_PATH: &str = "data/globalSportList.json";

/// Result of `SportRegistry::create`; a duplicate is not an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SportRegistry {
    sports: BTreeSet<String>,
    path: PathBuf,
}

impl Default for SportRegistry {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_REGISTRY_PATH)
    }
}

impl SportRegistry {
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        let mut registry = Self {
            sports: BTreeSet::new(),
            path: path.into(),
        };
        registry.load_defaults();
        registry
    }

    /// Resets the set to the built-in sports
    pub fn load_defaults(&mut self) {
        self.sports = DEFAULT_SPORTS.iter().map(|s| s.to_string()).collect();
    }

    /// Path last used for persistence
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sorted snapshot of the recognized names
    pub fn sports(&self) -> Vec<String> {
        self.sports.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.sports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }

    /// Case-insensitive, trimmed membership test
    pub fn is_valid(&self, name: &str) -> DomainResult<bool> {
        let key = normalize(name)?;
        Ok(self.sports.contains(&key))
    }

    /// Fails unless the sport is currently recognized
    pub fn validate_sport(&self, sport: &Sport) -> DomainResult<()> {
        if self.sports.contains(&sport.key()) {
            Ok(())
        } else {
            Err(DomainError::InvalidArgument(format!(
                "Unknown sport: {}",
                sport.name()
            )))
        }
    }

    pub fn create(&mut self, name: &str) -> DomainResult<CreateOutcome> {
        let key = normalize(name)?;
        if self.sports.insert(key.clone()) {
            debug!("Sport '{}' registered", key);
            Ok(CreateOutcome::Accepted)
        } else {
            Ok(CreateOutcome::Rejected)
        }
    }

    /// Removes a sport, refusing if any person would be left with no sports
    pub fn delete(&mut self, name: &str, persons: &[Person]) -> DomainResult<()> {
        let key = normalize(name)?;
        if !self.sports.contains(&key) {
            return Err(DomainError::EntityNotFound(format!("sport {}", key)));
        }

        let stranded: Vec<String> = persons
            .iter()
            .filter(|p| p.sports().iter().all(|s| s.key() == key))
            .map(|p| p.name().to_string())
            .collect();
        if !stranded.is_empty() {
            return Err(DomainError::ReferentialIntegrity(format!(
                "Cannot delete sport '{}': it is the only sport of {}",
                key,
                stranded.join(", ")
            )));
        }

        self.sports.remove(&key);
        debug!("Sport '{}' removed", key);
        Ok(())
    }

    /// Loads the set from `path`, replacing the current one.
    ///
    /// An absent file is created from the current set, which is kept.
    /// `path()` only changes once the load succeeds.
    pub fn load(&mut self, path: &Path) -> AppResult<()> {
        if !path.exists() {
            info!(
                "Sport list {} not found, writing current sports",
                path.display()
            );
            self.save(path)?;
            self.path = path.to_path_buf();
            return Ok(());
        }

        let content = fs::read_to_string(path)?;
        let names: Vec<String> = serde_json::from_str(&content).map_err(|e| {
            AppError::data_loading(format!("Sport list {} is malformed: {}", path.display(), e))
        })?;

        let sports = names
            .iter()
            .map(|name| normalize(name))
            .collect::<DomainResult<BTreeSet<String>>>()
            .map_err(|e| AppError::data_loading(e.to_string()))?;

        info!("Loaded {} sports from {}", sports.len(), path.display());
        self.sports = sports;
        self.path = path.to_path_buf();
        Ok(())
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.sports)?;
        fs::write(path, content)?;
        debug!("Saved {} sports to {}", self.sports.len(), path.display());
        Ok(())
    }
}

fn normalize(name: &str) -> DomainResult<String> {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return Err(DomainError::InvalidArgument(
            "Sport name cannot be empty".to_string(),
        ));
    }
    Ok(key)
}
