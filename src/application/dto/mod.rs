// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are caller-friendly representations
// - DTOs NEVER leak domain invariants
// - Input DTOs are validated by the command layer, never by serde

use serde::{Deserialize, Serialize};

use crate::domain::{format_date_time, Game, Person};

// ============================================================================
// PERSON DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    pub tags: Vec<String>,
    pub sports: Vec<String>,
}

/// Raw fields of a person to add
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub sports: Vec<String>,
}

// ============================================================================
// GAME DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub sport: String,
    pub date_time: String,
    pub postal_code: String,
    pub address: String,
    pub participants: Vec<String>,
}

// ============================================================================
// RESPONSE DTOs
// ============================================================================

/// Outcome of one command
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CommandResult {
    pub feedback: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persons: Option<Vec<PersonDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub games: Option<Vec<GameDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sports: Option<Vec<String>>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            ..Self::default()
        }
    }

    pub fn with_persons<'a>(mut self, persons: impl IntoIterator<Item = &'a Person>) -> Self {
        self.persons = Some(persons.into_iter().map(PersonDto::from).collect());
        self
    }

    pub fn with_games<'a>(mut self, games: impl IntoIterator<Item = &'a Game>) -> Self {
        self.games = Some(games.into_iter().map(GameDto::from).collect());
        self
    }

    pub fn with_sports(mut self, sports: Vec<String>) -> Self {
        self.sports = Some(sports);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<&Person> for PersonDto {
    fn from(person: &Person) -> Self {
        Self {
            name: person.name().to_string(),
            phone: person.phone().to_string(),
            email: person.email().to_string(),
            address: person.address().to_string(),
            postal_code: person.postal_code().to_string(),
            tags: person.tags().iter().map(|t| t.to_string()).collect(),
            sports: person.sports().iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl From<&Game> for GameDto {
    fn from(game: &Game) -> Self {
        Self {
            sport: game.sport().to_string(),
            date_time: format_date_time(&game.date_time()),
            postal_code: game.location().postal_code.clone(),
            address: game.location().address.clone(),
            participants: game
                .participants()
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
        }
    }
}
