// src/lib.rs
// Sportsmate - contacts, the sports they play, and the games they join
//
// Architecture:
// - Domain-centric: every invariant lives in the domain layer
// - Event-driven: the model announces each mutation on the event bus
// - Explicit: the model never parses text; commands do
// - Local-first: everything is kept in plain JSON files

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

#[cfg(test)]
pub mod test_support;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_person,
    Address,
    AddressBook,
    CreateOutcome,
    DomainError,
    DomainResult,
    Email,
    Game,
    GeoLocation,
    Identifiable,
    Name,
    Person,
    Phone,
    PostalCode,
    Sport,
    SportRegistry,
    Tag,
    UniqueEntityList,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    AddressBookReplaced,
    DomainEvent,
    EventBus,
    EventLogEntry,
    GameCancelled,
    GameScheduled,
    GameUpdated,
    PersonAdded,
    PersonDeleted,
    PersonUpdated,
    PersonViewChanged,
    SportCreated,
    SportDeleted,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use config::AppConfig;
pub use infrastructure::{JsonLocationTable, LocationLookup};
pub use repositories::{AddressBookRepository, JsonAddressBookRepository};

// ============================================================================
// PUBLIC API - Model
// ============================================================================

pub use services::{Model, ModelManager, PersonFilter, PersonOrder};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, Command, CommandResult, ErrorResponse};

// Re-export application submodules
pub use application::commands;
pub use application::dto;
