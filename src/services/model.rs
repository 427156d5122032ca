// src/services/model.rs
//
// The Model API used by the command layer and views.

use crate::domain::{
    AddressBook, CreateOutcome, Game, GeoLocation, Person, SportRegistry,
};
use crate::error::AppResult;

/// Which persons the person view shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PersonFilter {
    #[default]
    All,
    /// Any sport equal (case-insensitively) to any keyword
    SportKeywords(Vec<String>),
    /// Any whole name word equal (case-insensitively) to any keyword
    NameKeywords(Vec<String>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::SportKeywords(keywords) => person.plays_any(keywords),
            PersonFilter::NameKeywords(keywords) => {
                let keywords: Vec<String> =
                    keywords.iter().map(|k| k.trim().to_lowercase()).collect();
                person
                    .name()
                    .as_str()
                    .split_whitespace()
                    .map(str::to_lowercase)
                    .any(|word| keywords.contains(&word))
            }
        }
    }
}

/// How the person view is ordered
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PersonOrder {
    #[default]
    Insertion,
    /// Alphabetical by name
    Name,
    /// Nearest first; unresolvable postal codes go last
    DistanceFrom(GeoLocation),
}

pub trait Model {
    // ------------------------------------------------------------------
    // Address book
    // ------------------------------------------------------------------

    fn address_book(&self) -> &AddressBook;

    fn set_address_book(&mut self, book: AddressBook);

    // ------------------------------------------------------------------
    // Persons
    // ------------------------------------------------------------------

    fn has_person(&self, person: &Person) -> bool;

    /// Every sport of `person` must be registered
    fn add_person(&mut self, person: Person) -> AppResult<()>;

    fn delete_person(&mut self, person: &Person) -> AppResult<()>;

    fn set_person(&mut self, target: &Person, edited: Person) -> AppResult<()>;

    // ------------------------------------------------------------------
    // Games
    // ------------------------------------------------------------------

    fn has_game(&self, game: &Game) -> bool;

    /// Sport must be registered and every participant must be a person
    fn add_game(&mut self, game: Game) -> AppResult<()>;

    fn delete_game(&mut self, game: &Game) -> AppResult<()>;

    fn set_game(&mut self, target: &Game, edited: Game) -> AppResult<()>;

    fn add_member(&mut self, game: &Game, person: &Person) -> AppResult<Game>;

    fn remove_member(&mut self, game: &Game, person: &Person) -> AppResult<Game>;

    fn set_game_location(&mut self, game: &Game, location: GeoLocation) -> AppResult<Game>;

    fn games(&self) -> &[Game];

    // ------------------------------------------------------------------
    // Sports
    // ------------------------------------------------------------------

    fn sport_registry(&self) -> &SportRegistry;

    fn create_sport(&mut self, name: &str) -> AppResult<CreateOutcome>;

    /// Refused while any person would be left without sports
    fn delete_sport(&mut self, name: &str) -> AppResult<()>;

    // ------------------------------------------------------------------
    // Person view
    // ------------------------------------------------------------------

    /// Persons passing the current filter, in the current order
    fn filtered_persons(&self) -> Vec<&Person>;

    fn update_person_filter(&mut self, filter: PersonFilter, order: PersonOrder);
}
