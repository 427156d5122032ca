// src/application/state.rs
//
// Application state: the model plus everything needed to persist it.
// Built once at startup; every command goes through `execute`.
//
// Saving is driven by the event bus: any event that reports a change to
// persisted data marks the state dirty, and `execute` saves once afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{info, warn};

use crate::application::commands::Command;
use crate::application::dto::CommandResult;
use crate::config::AppConfig;
use crate::domain::{AddressBook, SportRegistry};
use crate::error::{AppError, AppResult};
use crate::events::{
    AddressBookReplaced, DomainEvent, EventBus, GameCancelled, GameScheduled, GameUpdated,
    PersonAdded, PersonDeleted, PersonUpdated, SportCreated, SportDeleted,
};
use crate::infrastructure::{JsonLocationTable, LocationLookup};
use crate::repositories::{AddressBookRepository, JsonAddressBookRepository};
use crate::services::{Model, ModelManager};

pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    model: ModelManager,
    storage: Arc<dyn AddressBookRepository>,
    lookup: Arc<dyn LocationLookup>,
    dirty: Arc<AtomicBool>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        model: ModelManager,
        storage: Arc<dyn AddressBookRepository>,
        lookup: Arc<dyn LocationLookup>,
    ) -> Self {
        let event_bus = Arc::clone(model.event_bus());
        let dirty = Arc::new(AtomicBool::new(false));
        track_changes(&event_bus, &dirty);

        Self {
            config,
            event_bus,
            model,
            storage,
            lookup,
            dirty,
        }
    }

    /// Loads the registry, the location table and the address book named by
    /// `config`. A malformed address book is logged and replaced by an empty one.
    pub fn load(config: AppConfig) -> AppResult<Self> {
        let mut registry = SportRegistry::with_defaults(&config.sport_registry_path);
        registry.load(&config.sport_registry_path)?;

        let lookup: Arc<dyn LocationLookup> = if config.location_table_path.exists() {
            Arc::new(JsonLocationTable::load(&config.location_table_path)?)
        } else {
            warn!(
                "Location table {} not found, no postal code will resolve",
                config.location_table_path.display()
            );
            Arc::new(JsonLocationTable::default())
        };

        let storage: Arc<dyn AddressBookRepository> =
            Arc::new(JsonAddressBookRepository::new(&config.address_book_path));
        let book = match storage.read(&registry, lookup.as_ref()) {
            Ok(Some(book)) => book,
            Ok(None) => {
                info!("Starting with an empty address book");
                AddressBook::new()
            }
            Err(e @ (AppError::DataLoading(_) | AppError::Serialization(_))) => {
                warn!("{}; starting with an empty address book", e);
                AddressBook::new()
            }
            Err(e) => return Err(e),
        };

        let model = ModelManager::new(book, registry, Arc::clone(&lookup), Arc::new(EventBus::new()));
        Ok(Self::new(config, model, storage, lookup))
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// Runs `command`; if it changed anything, saves straight away
    pub fn execute(&mut self, command: Command) -> AppResult<CommandResult> {
        let result = command.execute(&mut self.model, self.lookup.as_ref())?;
        if self.dirty.swap(false, Ordering::SeqCst) {
            self.save()?;
        }
        Ok(result)
    }

    pub fn save(&self) -> AppResult<()> {
        self.storage.save(self.model.address_book())?;
        let registry = self.model.sport_registry();
        registry.save(registry.path())
    }
}

fn track_changes(bus: &EventBus, dirty: &Arc<AtomicBool>) {
    fn mark_on<E: DomainEvent + 'static>(bus: &EventBus, dirty: &Arc<AtomicBool>) {
        let dirty = Arc::clone(dirty);
        bus.subscribe::<E, _>(move |_| dirty.store(true, Ordering::SeqCst));
    }

    mark_on::<PersonAdded>(bus, dirty);
    mark_on::<PersonUpdated>(bus, dirty);
    mark_on::<PersonDeleted>(bus, dirty);
    mark_on::<GameScheduled>(bus, dirty);
    mark_on::<GameUpdated>(bus, dirty);
    mark_on::<GameCancelled>(bus, dirty);
    mark_on::<SportCreated>(bus, dirty);
    mark_on::<SportDeleted>(bus, dirty);
    mark_on::<AddressBookReplaced>(bus, dirty);
}
