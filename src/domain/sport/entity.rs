use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A sport played by a person or scheduled in a game.
///
/// Equality and hashing ignore case. Whether the name is *recognized* is
/// decided by the sport registry, not by the value itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sport {
    name: String,
}

impl Sport {
    /// Name cannot be blank; surrounding whitespace is dropped
    pub fn new(name: &str) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidArgument(
                "Sport name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase form, the registry's storage key
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Case-insensitive keyword match against the whole name
    pub fn matches(&self, keyword: &str) -> bool {
        self.key() == keyword.trim().to_lowercase()
    }
}

impl PartialEq for Sport {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Sport {}

impl Hash for Sport {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl TryFrom<String> for Sport {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Sport::new(&value)
    }
}

impl From<Sport> for String {
    fn from(sport: Sport) -> Self {
        sport.name
    }
}

impl std::fmt::Display for Sport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
