// src/domain/address_book.rs
//
// Aggregate root owning every Person and Game.
//
// CRITICAL RULES:
// - Persons are unique by name, games by scheduled instant
// - Games stay sorted by scheduled instant
// - A game's participants must be persons of this book
//   (checked by add_game_with_validation, add_member and
//   validate_referential_integrity; kept true by set_person/remove_person)
// - Every failed operation leaves the book unchanged

use crate::domain::game::Game;
use crate::domain::location::GeoLocation;
use crate::domain::person::{validate_person, Person};
use crate::domain::sport::Sport;
use crate::domain::unique_list::{Identifiable, UniqueEntityList};
use crate::domain::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq)]
pub struct AddressBook {
    persons: UniqueEntityList<Person>,
    games: UniqueEntityList<Game>,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self {
            persons: UniqueEntityList::new(),
            games: UniqueEntityList::sorted_by(Game::cmp_by_date_time),
        }
    }
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from raw parts, rejecting identity collisions
    pub fn from_parts(persons: Vec<Person>, games: Vec<Game>) -> DomainResult<Self> {
        let mut book = Self::new();
        book.set_persons(persons)?;
        book.set_games(games)?;
        Ok(book)
    }

    pub fn set_persons(&mut self, persons: Vec<Person>) -> DomainResult<()> {
        self.persons.set_all(persons)
    }

    pub fn set_games(&mut self, games: Vec<Game>) -> DomainResult<()> {
        self.games.set_all(games)
    }

    pub fn persons(&self) -> &UniqueEntityList<Person> {
        &self.persons
    }

    pub fn games(&self) -> &UniqueEntityList<Game> {
        &self.games
    }

    // ------------------------------------------------------------------
    // Persons
    // ------------------------------------------------------------------

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> DomainResult<()> {
        self.persons.add(person)
    }

    /// Replaces `target` and every roster copy of it
    pub fn set_person(&mut self, target: &Person, replacement: Person) -> DomainResult<()> {
        validate_person(&replacement)?;
        if self.persons.position_of(target).is_none() {
            return Err(DomainError::EntityNotFound(format!(
                "person {}",
                target.identity_label()
            )));
        }

        let mut updated_games = Vec::new();
        for game in self.games.iter() {
            if let Some(stored) = game.participants().find_same_identity(target) {
                let updated = game.with_participant_replaced(stored, replacement.clone())?;
                updated_games.push((game.clone(), updated));
            }
        }

        self.persons.replace(target, replacement)?;
        for (old, new) in updated_games {
            self.games.replace(&old, new)?;
        }
        Ok(())
    }

    /// Removes the person and drops them from every roster
    pub fn remove_person(&mut self, person: &Person) -> DomainResult<Person> {
        let removed = self.persons.remove(person)?;

        let updated_games = self
            .games
            .iter()
            .filter_map(|game| {
                game.participants()
                    .find_same_identity(&removed)
                    .map(|stored| (game, stored))
            })
            .map(|(game, stored)| Ok((game.clone(), game.with_participant_removed(stored)?)))
            .collect::<DomainResult<Vec<_>>>()?;

        for (old, new) in updated_games {
            self.games.replace(&old, new)?;
        }
        Ok(removed)
    }

    /// Persons whose sports include `sport`
    pub fn persons_playing(&self, sport: &Sport) -> Vec<&Person> {
        self.persons.iter().filter(|p| p.plays(sport)).collect()
    }

    // ------------------------------------------------------------------
    // Games
    // ------------------------------------------------------------------

    pub fn has_game(&self, game: &Game) -> bool {
        self.games.contains(game)
    }

    pub fn add_game(&mut self, game: Game) -> DomainResult<()> {
        self.games.add(game)
    }

    /// Like `add_game`, but every participant must already be a person here
    pub fn add_game_with_validation(&mut self, game: Game) -> DomainResult<()> {
        self.check_participants(&game)?;
        self.games.add(game)
    }

    pub fn set_game(&mut self, target: &Game, replacement: Game) -> DomainResult<()> {
        self.games.replace(target, replacement)
    }

    pub fn remove_game(&mut self, game: &Game) -> DomainResult<Game> {
        self.games.remove(game)
    }

    /// Adds `person` to the roster of `game` in one replacement
    pub fn add_member(&mut self, game: &Game, person: &Person) -> DomainResult<Game> {
        let stored = self.persons.find_same_identity(person).ok_or_else(|| {
            DomainError::ReferentialIntegrity(format!(
                "{} is not in the address book",
                person.name()
            ))
        })?;
        let updated = game.with_participant_added(stored.clone())?;
        self.games.replace(game, updated.clone())?;
        Ok(updated)
    }

    /// Removes `person` from the roster of `game` in one replacement
    pub fn remove_member(&mut self, game: &Game, person: &Person) -> DomainResult<Game> {
        let stored = game
            .participants()
            .find_same_identity(person)
            .ok_or_else(|| {
                DomainError::EntityNotFound(format!(
                    "{} is not a participant of the game {}",
                    person.name(),
                    game.identity_label()
                ))
            })?;
        let updated = game.with_participant_removed(stored)?;
        self.games.replace(game, updated.clone())?;
        Ok(updated)
    }

    pub fn set_game_location(&mut self, game: &Game, location: GeoLocation) -> DomainResult<Game> {
        let updated = game.with_location(location);
        self.games.replace(game, updated.clone())?;
        Ok(updated)
    }

    /// Games scheduled for `sport`
    pub fn games_for(&self, sport: &Sport) -> Vec<&Game> {
        self.games.iter().filter(|g| g.sport() == sport).collect()
    }

    /// Checks that every participant of every game is a person of this book
    pub fn validate_referential_integrity(&self) -> DomainResult<()> {
        self.games
            .iter()
            .try_for_each(|game| self.check_participants(game))
    }

    fn check_participants(&self, game: &Game) -> DomainResult<()> {
        match game.participants().iter().find(|p| !self.persons.contains(p)) {
            Some(missing) => Err(DomainError::ReferentialIntegrity(format!(
                "Participant {} of the game {} is not in the address book",
                missing.name(),
                game.identity_label()
            ))),
            None => Ok(()),
        }
    }
}
