// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// Implements `DomainEvent` for a struct carrying `event_id` and `occurred_at`
macro_rules! impl_domain_event {
    ($event:ident) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($event)
            }
        }
    };
}

// ============================================================================
// PERSON EVENTS
// ============================================================================

/// Emitted when a person joins the address book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
}

impl PersonAdded {
    pub fn new(name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
        }
    }
}

impl_domain_event!(PersonAdded);

/// Emitted when a person is replaced by an edited copy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub previous_name: String,
    pub name: String,
}

impl PersonUpdated {
    pub fn new(previous_name: String, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            previous_name,
            name,
        }
    }
}

impl_domain_event!(PersonUpdated);

/// Emitted when a person is removed (and dropped from every roster)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
}

impl PersonDeleted {
    pub fn new(name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
        }
    }
}

impl_domain_event!(PersonDeleted);

// ============================================================================
// GAME EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameScheduled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub sport: String,
    pub date_time: NaiveDateTime,
}

impl GameScheduled {
    pub fn new(sport: String, date_time: NaiveDateTime) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            sport,
            date_time,
        }
    }
}

impl_domain_event!(GameScheduled);

/// Emitted when a game's roster or location changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub date_time: NaiveDateTime,
    pub participant_count: usize,
    pub postal_code: String,
}

impl GameUpdated {
    pub fn new(date_time: NaiveDateTime, participant_count: usize, postal_code: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            date_time,
            participant_count,
            postal_code,
        }
    }
}

impl_domain_event!(GameUpdated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameCancelled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub date_time: NaiveDateTime,
}

impl GameCancelled {
    pub fn new(date_time: NaiveDateTime) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            date_time,
        }
    }
}

impl_domain_event!(GameCancelled);

// ============================================================================
// SPORT REGISTRY EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
}

impl SportCreated {
    pub fn new(name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
        }
    }
}

impl_domain_event!(SportCreated);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub name: String,
}

impl SportDeleted {
    pub fn new(name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            name,
        }
    }
}

impl_domain_event!(SportDeleted);

// ============================================================================
// VIEW EVENTS
// ============================================================================

/// Emitted when the whole address book is swapped out (load, reset)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressBookReplaced {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub person_count: usize,
    pub game_count: usize,
}

impl AddressBookReplaced {
    pub fn new(person_count: usize, game_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            person_count,
            game_count,
        }
    }
}

impl_domain_event!(AddressBookReplaced);

/// Emitted when the displayed person filter or order changes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonViewChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub shown: usize,
}

impl PersonViewChanged {
    pub fn new(shown: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            shown,
        }
    }
}

impl_domain_event!(PersonViewChanged);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_names() {
        assert_eq!(PersonAdded::new("A".into()).event_type(), "PersonAdded");
        assert_eq!(
            AddressBookReplaced::new(1, 2).event_type(),
            "AddressBookReplaced"
        );
    }

    #[test]
    fn test_event_ids_unique() {
        let a = SportCreated::new("golf".into());
        let b = SportCreated::new("golf".into());
        assert_ne!(a.event_id(), b.event_id());
    }
}
