// src/services/model_manager.rs
//
// In-memory Model: owns the address book, the sport registry and the
// person view state, and emits an event after every successful mutation.

use std::cmp::Ordering;
use std::sync::Arc;

use log::{debug, info};

use crate::domain::{
    AddressBook, CreateOutcome, DomainError, DomainResult, Game, GeoLocation, Person, Sport,
    SportRegistry,
};
use crate::error::AppResult;
use crate::events::{
    AddressBookReplaced, EventBus, GameCancelled, GameScheduled, GameUpdated, PersonAdded,
    PersonDeleted, PersonUpdated, PersonViewChanged, SportCreated, SportDeleted,
};
use crate::infrastructure::LocationLookup;
use crate::services::model::{Model, PersonFilter, PersonOrder};

pub struct ModelManager {
    address_book: AddressBook,
    registry: SportRegistry,
    filter: PersonFilter,
    order: PersonOrder,
    lookup: Arc<dyn LocationLookup>,
    event_bus: Arc<EventBus>,
}

impl ModelManager {
    pub fn new(
        address_book: AddressBook,
        registry: SportRegistry,
        lookup: Arc<dyn LocationLookup>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        info!(
            "Initializing model with {} persons, {} games and {} sports",
            address_book.persons().len(),
            address_book.games().len(),
            registry.len()
        );
        Self {
            address_book,
            registry,
            filter: PersonFilter::All,
            order: PersonOrder::Insertion,
            lookup,
            event_bus,
        }
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    fn validate_sports(&self, sports: &[Sport]) -> AppResult<()> {
        for sport in sports {
            self.registry.validate_sport(sport)?;
        }
        Ok(())
    }

    fn emit_game_updated(&self, game: &Game) {
        self.event_bus.emit(GameUpdated::new(
            game.date_time(),
            game.participants().len(),
            game.location().postal_code.clone(),
        ));
    }

    fn distance_to(&self, person: &Person, origin: &GeoLocation) -> Option<f64> {
        self.lookup
            .find(person.postal_code())
            .map(|location| origin.distance_to(&location))
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn set_address_book(&mut self, book: AddressBook) {
        self.address_book = book;
        self.event_bus.emit(AddressBookReplaced::new(
            self.address_book.persons().len(),
            self.address_book.games().len(),
        ));
    }

    fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    fn add_person(&mut self, person: Person) -> AppResult<()> {
        self.validate_sports(person.sports())?;
        let name = person.name().to_string();
        self.address_book.add_person(person)?;
        debug!("Added person {}", name);
        self.event_bus.emit(PersonAdded::new(name));
        Ok(())
    }

    fn delete_person(&mut self, person: &Person) -> AppResult<()> {
        let removed = self.address_book.remove_person(person)?;
        debug!("Deleted person {}", removed.name());
        self.event_bus.emit(PersonDeleted::new(removed.name().to_string()));
        Ok(())
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> AppResult<()> {
        self.validate_sports(edited.sports())?;
        let event = PersonUpdated::new(target.name().to_string(), edited.name().to_string());
        self.address_book.set_person(target, edited)?;
        self.event_bus.emit(event);
        Ok(())
    }

    fn has_game(&self, game: &Game) -> bool {
        self.address_book.has_game(game)
    }

    fn add_game(&mut self, game: Game) -> AppResult<()> {
        self.registry.validate_sport(game.sport())?;
        let event = GameScheduled::new(game.sport().to_string(), game.date_time());
        self.address_book.add_game_with_validation(game)?;
        self.event_bus.emit(event);
        Ok(())
    }

    fn delete_game(&mut self, game: &Game) -> AppResult<()> {
        let removed = self.address_book.remove_game(game)?;
        self.event_bus.emit(GameCancelled::new(removed.date_time()));
        Ok(())
    }

    fn set_game(&mut self, target: &Game, edited: Game) -> AppResult<()> {
        self.registry.validate_sport(edited.sport())?;
        self.address_book.set_game(target, edited.clone())?;
        self.emit_game_updated(&edited);
        Ok(())
    }

    fn add_member(&mut self, game: &Game, person: &Person) -> AppResult<Game> {
        let updated = self.address_book.add_member(game, person)?;
        self.emit_game_updated(&updated);
        Ok(updated)
    }

    fn remove_member(&mut self, game: &Game, person: &Person) -> AppResult<Game> {
        let updated = self.address_book.remove_member(game, person)?;
        self.emit_game_updated(&updated);
        Ok(updated)
    }

    fn set_game_location(&mut self, game: &Game, location: GeoLocation) -> AppResult<Game> {
        let updated = self.address_book.set_game_location(game, location)?;
        self.emit_game_updated(&updated);
        Ok(updated)
    }

    fn games(&self) -> &[Game] {
        self.address_book.games().as_slice()
    }

    fn sport_registry(&self) -> &SportRegistry {
        &self.registry
    }

    fn create_sport(&mut self, name: &str) -> AppResult<CreateOutcome> {
        let outcome = self.registry.create(name)?;
        if outcome == CreateOutcome::Accepted {
            self.event_bus
                .emit(SportCreated::new(name.trim().to_lowercase()));
        }
        Ok(outcome)
    }

    /// Also drops the sport from every person who plays it alongside others.
    /// Refused while a game is scheduled for it.
    fn delete_sport(&mut self, name: &str) -> AppResult<()> {
        let sport = Sport::new(name)?;

        let scheduled = self.address_book.games_for(&sport);
        if let Some(game) = scheduled.first() {
            return Err(DomainError::ReferentialIntegrity(format!(
                "Cannot delete sport '{}': a game is scheduled for it on {}",
                sport.key(),
                game.date_time()
            ))
            .into());
        }

        // the registry check below guarantees each of these keeps a sport
        let edits = self
            .address_book
            .persons_playing(&sport)
            .into_iter()
            .filter(|p| p.sports().len() > 1)
            .map(|p| -> DomainResult<(Person, Person)> {
                Ok((p.clone(), p.with_sport_removed(&sport)?))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        self.registry
            .delete(name, self.address_book.persons().as_slice())?;
        for (old, new) in edits {
            self.address_book.set_person(&old, new)?;
        }

        debug!("Deleted sport {}", sport.key());
        self.event_bus.emit(SportDeleted::new(sport.key()));
        Ok(())
    }

    fn filtered_persons(&self) -> Vec<&Person> {
        let persons = self
            .address_book
            .persons()
            .iter()
            .filter(|p| self.filter.matches(p));

        match &self.order {
            PersonOrder::Insertion => persons.collect(),
            PersonOrder::Name => {
                let mut sorted: Vec<&Person> = persons.collect();
                sorted.sort_by(|a, b| {
                    a.name()
                        .as_str()
                        .to_lowercase()
                        .cmp(&b.name().as_str().to_lowercase())
                });
                sorted
            }
            PersonOrder::DistanceFrom(origin) => {
                let mut ranked: Vec<(&Person, Option<f64>)> = persons
                    .map(|p| (p, self.distance_to(p, origin)))
                    .collect();
                // stable: ties keep address book order
                ranked.sort_by(|(_, a), (_, b)| match (a, b) {
                    (Some(a), Some(b)) => a.total_cmp(b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                });
                ranked.into_iter().map(|(p, _)| p).collect()
            }
        }
    }

    fn update_person_filter(&mut self, filter: PersonFilter, order: PersonOrder) {
        self.filter = filter;
        self.order = order;
        self.event_bus
            .emit(PersonViewChanged::new(self.filtered_persons().len()));
    }
}
