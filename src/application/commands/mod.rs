// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - One `Command` variant per user verb, dispatched by a single match
// - Handlers turn raw text into validated values before calling the Model
// - Each handler makes exactly one mutating Model call
// - Handlers NEVER contain business rules

pub mod game_commands;
pub mod person_commands;
pub mod sport_commands;

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::application::dto::{CommandResult, PersonInput};
use crate::domain::{DomainError, Game, GeoLocation, Person, PostalCode, Sport};
use crate::error::{AppError, AppResult};
use crate::infrastructure::{resolve_location, LocationLookup};
use crate::services::Model;

// ============================================================================
// INDEX
// ============================================================================

/// One-based position in a displayed list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(value: usize) -> AppResult<Self> {
        NonZeroUsize::new(value)
            .map(Index)
            .ok_or_else(|| AppError::invalid_input("Index must be a positive integer"))
    }

    pub fn from_zero_based(value: usize) -> Self {
        Index(NonZeroUsize::MIN.saturating_add(value))
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl TryFrom<usize> for Index {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Index::from_one_based(value).map_err(|e| e.to_string())
    }
}

impl From<Index> for usize {
    fn from(index: Index) -> Self {
        index.one_based()
    }
}

// ============================================================================
// COMMAND
// ============================================================================

/// Every verb the application understands.
///
/// Wire form is internally tagged: `{"command": "deletePerson", "index": 2}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Command {
    AddPerson(PersonInput),
    DeletePerson { index: Index },
    ListPersons,
    AddGame {
        sport: String,
        date_time: String,
        postal_code: String,
    },
    DeleteGame { index: Index },
    AddMember { game: Index, person: Index },
    DeleteMember { game: Index, person: Index },
    EditGameLocation { game: Index, postal_code: String },
    /// Adds sports to one person
    AddSport { index: Index, sports: Vec<String> },
    /// Removes a sport from one person
    DeleteSport { index: Index, sport: String },
    CreateSport { name: String },
    DeleteGlobalSport { name: String },
    ListSports,
    FindSport { keywords: Vec<String> },
    FindSportByDistance {
        keywords: Vec<String>,
        postal_code: String,
    },
}

impl Command {
    pub fn execute(
        self,
        model: &mut dyn Model,
        lookup: &dyn LocationLookup,
    ) -> AppResult<CommandResult> {
        match self {
            Command::AddPerson(input) => person_commands::add_person(model, input),
            Command::DeletePerson { index } => person_commands::delete_person(model, index),
            Command::ListPersons => person_commands::list_persons(model),
            Command::AddGame {
                sport,
                date_time,
                postal_code,
            } => game_commands::add_game(model, lookup, &sport, &date_time, &postal_code),
            Command::DeleteGame { index } => game_commands::delete_game(model, index),
            Command::AddMember { game, person } => game_commands::add_member(model, game, person),
            Command::DeleteMember { game, person } => {
                game_commands::delete_member(model, game, person)
            }
            Command::EditGameLocation { game, postal_code } => {
                game_commands::edit_game_location(model, lookup, game, &postal_code)
            }
            Command::AddSport { index, sports } => {
                sport_commands::add_sports_to_person(model, index, &sports)
            }
            Command::DeleteSport { index, sport } => {
                sport_commands::delete_sport_from_person(model, index, &sport)
            }
            Command::CreateSport { name } => sport_commands::create_sport(model, &name),
            Command::DeleteGlobalSport { name } => sport_commands::delete_global_sport(model, &name),
            Command::ListSports => sport_commands::list_sports(model),
            Command::FindSport { keywords } => sport_commands::find_sport(model, keywords),
            Command::FindSportByDistance {
                keywords,
                postal_code,
            } => sport_commands::find_sport_by_distance(model, lookup, keywords, &postal_code),
        }
    }
}

// ============================================================================
// PARAMETER HELPERS
// ============================================================================

/// User-facing validation failure
pub(crate) fn invalid(error: DomainError) -> AppError {
    AppError::invalid_input(error.to_string())
}

/// Person at `index` of the currently displayed list
pub(crate) fn person_at(model: &dyn Model, index: Index) -> AppResult<Person> {
    model
        .filtered_persons()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or_else(|| AppError::invalid_input("The person index provided is invalid"))
}

pub(crate) fn game_at(model: &dyn Model, index: Index) -> AppResult<Game> {
    model
        .games()
        .get(index.zero_based())
        .cloned()
        .ok_or_else(|| AppError::invalid_input("The game index provided is invalid"))
}

/// A sport name that is present in the registry
pub(crate) fn registered_sport(model: &dyn Model, raw: &str) -> AppResult<Sport> {
    let sport = Sport::new(raw).map_err(invalid)?;
    model
        .sport_registry()
        .validate_sport(&sport)
        .map_err(invalid)?;
    Ok(sport)
}

pub(crate) fn location_of(lookup: &dyn LocationLookup, raw: &str) -> AppResult<GeoLocation> {
    let postal_code = PostalCode::new(raw).map_err(invalid)?;
    resolve_location(lookup, &postal_code)
}
