// src/events/mod.rs
//
// Internal Event System - Public API
//
// Handlers are type-erased inside the bus; only typed `subscribe` is public

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // View
    AddressBookReplaced,
    // Game
    GameCancelled,
    GameScheduled,
    GameUpdated,
    // Person
    PersonAdded,
    PersonDeleted,
    PersonUpdated,
    PersonViewChanged,
    // Sport registry
    SportCreated,
    SportDeleted,
};

pub use bus::{EventBus, EventLogEntry, EVENT_LOG_CAPACITY};
