// src/events/bus/event_bus.rs
//
// In-process, synchronous event bus.
//
// RULES:
// - Handlers run on the emitting thread, in subscription order
// - No lock is held while a handler runs, so handlers may subscribe or emit
// - A panicking handler is logged and the remaining handlers still run
// - Only the last EVENT_LOG_CAPACITY emissions are remembered

use std::any::{Any, TypeId};
use std::collections::{HashMap, VecDeque};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use log::{debug, error};
use uuid::Uuid;

use crate::events::types::DomainEvent;

/// How many recent emissions `recent_events` can return
pub const EVENT_LOG_CAPACITY: usize = 64;

type Handler = Arc<dyn Fn(&dyn Any) + Send + Sync>;

/// One remembered emission
#[derive(Debug, Clone, PartialEq)]
pub struct EventLogEntry {
    pub event_type: &'static str,
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

/// Fan-out point between the model and whoever reacts to its changes.
///
/// The model manager emits after every successful mutation; the
/// application state subscribes to know when data must be saved.
#[derive(Default)]
pub struct EventBus {
    handlers: RwLock<HashMap<TypeId, Vec<Handler>>>,
    recent: Mutex<VecDeque<EventLogEntry>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for every future `E`
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let erased: Handler = Arc::new(move |event: &dyn Any| match event.downcast_ref::<E>() {
            Some(event) => handler(event),
            None => error!("Event routed to a handler for {}", std::any::type_name::<E>()),
        });

        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(TypeId::of::<E>())
            .or_default()
            .push(erased);
    }

    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        // snapshot, then release the lock before dispatch
        let handlers: Vec<Handler> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<E>())
            .cloned()
            .unwrap_or_default();

        debug!(
            "{} ({}) -> {} handler(s)",
            event.event_type(),
            event.event_id(),
            handlers.len()
        );
        self.remember(&event);

        for handler in &handlers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| handler(&event as &dyn Any)));
            if outcome.is_err() {
                error!("A handler for {} panicked", event.event_type());
            }
        }
    }

    /// Most recent emissions, oldest first
    pub fn recent_events(&self) -> Vec<EventLogEntry> {
        self.recent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    fn remember<E: DomainEvent>(&self, event: &E) {
        let mut recent = self.recent.lock().unwrap_or_else(PoisonError::into_inner);
        if recent.len() == EVENT_LOG_CAPACITY {
            recent.pop_front();
        }
        recent.push_back(EventLogEntry {
            event_type: event.event_type(),
            event_id: event.event_id(),
            occurred_at: event.occurred_at(),
        });
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let subscriptions: usize = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .map(Vec::len)
            .sum();
        f.debug_struct("EventBus")
            .field("subscriptions", &subscriptions)
            .finish()
    }
}
