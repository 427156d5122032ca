// src/domain/person/fields.rs
//
// Validated contact fields. Each value can only be built through `new`,
// so a constructed Person never carries malformed data.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Declares a trimmed, validated string newtype with serde support
macro_rules! validated_string {
    ($(#[$meta:meta])* $name:ident, $label:literal, $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(value: &str) -> DomainResult<Self> {
                let value = value.trim();
                let check: fn(&str) -> bool = $check;
                if !check(value) {
                    return Err(DomainError::InvalidArgument(format!(
                        "Invalid {}: '{}'",
                        $label, value
                    )));
                }
                Ok(Self(value.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").unwrap())
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9+_.\-]*@[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z0-9]{2,}$").unwrap()
    })
}

validated_string!(
    /// Person name; also the person's identity key (exact, case-sensitive)
    Name,
    "name",
    |v| name_pattern().is_match(v)
);

validated_string!(
    /// Phone number, at least 3 digits
    Phone,
    "phone number",
    |v| v.len() >= 3 && v.chars().all(|c| c.is_ascii_digit())
);

validated_string!(Email, "email", |v| email_pattern().is_match(v));

validated_string!(Address, "address", |v| !v.is_empty());

validated_string!(
    /// Six-digit postal code, the key into the location table
    PostalCode,
    "postal code",
    |v| v.len() == 6 && v.chars().all(|c| c.is_ascii_digit())
);

validated_string!(
    /// Single alphanumeric word
    Tag,
    "tag",
    |v| !v.is_empty() && v.chars().all(|c| c.is_alphanumeric())
);
