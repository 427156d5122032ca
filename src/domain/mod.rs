// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod address_book;
pub mod game;
pub mod location;
pub mod person;
pub mod sport;
pub mod unique_list;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Collections
pub use unique_list::{Identifiable, UniqueEntityList};

// Location
pub use location::{GeoLocation, EARTH_RADIUS_KM};

// Sport Domain
pub use sport::{CreateOutcome, Sport, SportRegistry, DEFAULT_REGISTRY_PATH, DEFAULT_SPORTS};

// Person Domain
pub use person::{validate_person, Address, Email, Name, Person, Phone, PostalCode, Tag};

// Game Domain
pub use game::{format_date_time, parse_date_time, Game, DATE_TIME_FORMAT};

// Aggregate Root
pub use address_book::AddressBook;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Duplicate {0}")]
    DuplicateEntity(String),

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
