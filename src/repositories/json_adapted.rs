// src/repositories/json_adapted.rs
//
// JSON-friendly mirrors of the domain entities.
//
// PRINCIPLES:
// - Plain serde structs, no invariants of their own
// - `from_model` never fails; `to_model` re-validates everything
// - Any invalid field aborts the whole conversion

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::{
    format_date_time, parse_date_time, Address, AddressBook, DomainResult, Email, Game, Name,
    Person, Phone, PostalCode, Sport, SportRegistry, Tag, UniqueEntityList,
};
use crate::error::{AppError, AppResult};
use crate::infrastructure::LocationLookup;

pub const MESSAGE_DUPLICATE_PERSON: &str = "Persons list contains duplicate person(s).";
pub const MESSAGE_DUPLICATE_GAME: &str = "Games list contains games at the same date and time.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedPerson {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub postal_code: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub sports: Vec<String>,
}

impl JsonAdaptedPerson {
    pub fn from_model(person: &Person) -> Self {
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

    /// Rebuilds the Person; every sport must be in `registry`
    pub fn to_model(&self, registry: &SportRegistry) -> AppResult<Person> {
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<DomainResult<BTreeSet<Tag>>>()
            .map_err(|e| invalid_field(&self.name, e))?;

        let sports = self
            .sports
            .iter()
            .map(|s| {
                let sport = Sport::new(s)?;
                registry.validate_sport(&sport)?;
                Ok(sport)
            })
            .collect::<DomainResult<Vec<Sport>>>()
            .map_err(|e| invalid_field(&self.name, e))?;

        self.build(tags, sports)
            .map_err(|e| invalid_field(&self.name, e))
    }

    fn build(&self, tags: BTreeSet<Tag>, sports: Vec<Sport>) -> DomainResult<Person> {
        Person::new(
            Name::new(&self.name)?,
            Phone::new(&self.phone)?,
            Email::new(&self.email)?,
            Address::new(&self.address)?,
            PostalCode::new(&self.postal_code)?,
            tags,
            sports,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonAdaptedGame {
    pub sport: String,
    pub date_time: String,
    /// Postal code, resolved again on load
    pub location: String,
    #[serde(default)]
    pub participants: Vec<JsonAdaptedPerson>,
}

impl JsonAdaptedGame {
    pub fn from_model(game: &Game) -> Self {
        Self {
            sport: game.sport().to_string(),
            date_time: format_date_time(&game.date_time()),
            location: game.location().postal_code.clone(),
            participants: game
                .participants()
                .iter()
                .map(JsonAdaptedPerson::from_model)
                .collect(),
        }
    }

    /// Rebuilds the Game; participants are swapped for the canonical
    /// Person of the same identity in `persons`
    pub fn to_model(
        &self,
        registry: &SportRegistry,
        lookup: &dyn LocationLookup,
        persons: &UniqueEntityList<Person>,
    ) -> AppResult<Game> {
        let label = format!("game at {}", self.date_time);

        let sport = Sport::new(&self.sport)
            .and_then(|sport| registry.validate_sport(&sport).map(|_| sport))
            .map_err(|e| invalid_field(&label, e))?;
        let date_time = parse_date_time(&self.date_time).map_err(|e| invalid_field(&label, e))?;

        let postal_code = PostalCode::new(&self.location).map_err(|e| invalid_field(&label, e))?;
        let location = lookup.find(&postal_code).ok_or_else(|| {
            AppError::data_loading(format!("{}: unknown postal code {}", label, postal_code))
        })?;

        let mut participants = Vec::with_capacity(self.participants.len());
        for adapted in &self.participants {
            let participant = adapted.to_model(registry)?;
            let canonical = persons.find_same_identity(&participant).ok_or_else(|| {
                AppError::data_loading(format!(
                    "{}: participant {} is not in the address book",
                    label,
                    participant.name()
                ))
            })?;
            participants.push(canonical.clone());
        }

        Game::new(sport, date_time, location)
            .with_participants(participants)
            .map_err(|e| invalid_field(&label, e))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonSerializableAddressBook {
    #[serde(default)]
    pub persons: Vec<JsonAdaptedPerson>,
    #[serde(default)]
    pub games: Vec<JsonAdaptedGame>,
}

impl JsonSerializableAddressBook {
    pub fn from_model(book: &AddressBook) -> Self {
        Self {
            persons: book
                .persons()
                .iter()
                .map(JsonAdaptedPerson::from_model)
                .collect(),
            games: book.games().iter().map(JsonAdaptedGame::from_model).collect(),
        }
    }

    /// All-or-nothing conversion into an AddressBook
    pub fn to_model(
        &self,
        registry: &SportRegistry,
        lookup: &dyn LocationLookup,
    ) -> AppResult<AddressBook> {
        let mut book = AddressBook::new();

        let persons = self
            .persons
            .iter()
            .map(|p| p.to_model(registry))
            .collect::<AppResult<Vec<Person>>>()?;
        book.set_persons(persons)
            .map_err(|_| AppError::data_loading(MESSAGE_DUPLICATE_PERSON))?;

        let games = self
            .games
            .iter()
            .map(|g| g.to_model(registry, lookup, book.persons()))
            .collect::<AppResult<Vec<Game>>>()?;
        book.set_games(games)
            .map_err(|_| AppError::data_loading(MESSAGE_DUPLICATE_GAME))?;

        Ok(book)
    }
}

fn invalid_field(owner: &str, error: crate::domain::DomainError) -> AppError {
    AppError::data_loading(format!("Invalid data for {}: {}", owner, error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{game, location_table, person, typical_address_book};

    fn adapted(name: &str, sports: &[&str]) -> JsonAdaptedPerson {
        JsonAdaptedPerson::from_model(&person(name, sports))
    }

    #[test]
    fn test_person_json_field_names() {
        let json = serde_json::to_value(adapted("Alice Pauline", &["tennis"])).unwrap();
        assert_eq!(json["postalCode"], "048616");
        assert_eq!(json["sports"][0], "tennis");
    }

    #[test]
    fn test_person_with_unknown_sport_fails() {
        let mut p = adapted("Alice Pauline", &["tennis"]);
        p.sports = vec!["quidditch".to_string()];
        let err = p.to_model(&SportRegistry::default()).unwrap_err();
        assert!(matches!(err, AppError::DataLoading(_)));
        assert!(err.to_string().contains("quidditch"));
    }

    #[test]
    fn test_person_with_invalid_phone_fails() {
        let mut p = adapted("Alice Pauline", &["tennis"]);
        p.phone = "+651234".to_string();
        assert!(matches!(
            p.to_model(&SportRegistry::default()),
            Err(AppError::DataLoading(_))
        ));
    }

    #[test]
    fn test_person_without_sports_fails() {
        let mut p = adapted("Alice Pauline", &["tennis"]);
        p.sports.clear();
        assert!(p.to_model(&SportRegistry::default()).is_err());
    }

    #[test]
    fn test_game_round_trip_through_json() {
        let book = typical_address_book();
        let alice = book.persons().get(0).unwrap().clone();
        let original = game("badminton", "2023-10-10T10:00", "058357")
            .with_participants(vec![alice])
            .unwrap();

        let json = JsonAdaptedGame::from_model(&original);
        assert_eq!(json.date_time, "2023-10-10T10:00");
        assert_eq!(json.location, "058357");

        let restored = json
            .to_model(&SportRegistry::default(), &location_table(), book.persons())
            .unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_game_with_bad_date_fails() {
        let mut json = JsonAdaptedGame::from_model(&game("tennis", "2023-10-10T10:00", "048616"));
        json.date_time = "2023-13-45T10:00".to_string();
        let err = json
            .to_model(&SportRegistry::default(), &location_table(), &UniqueEntityList::new())
            .unwrap_err();
        assert!(matches!(err, AppError::DataLoading(_)));
    }

    #[test]
    fn test_game_with_unknown_postal_code_fails() {
        let mut json = JsonAdaptedGame::from_model(&game("tennis", "2023-10-10T10:00", "048616"));
        json.location = "999999".to_string();
        let err = json
            .to_model(&SportRegistry::default(), &location_table(), &UniqueEntityList::new())
            .unwrap_err();
        assert!(err.to_string().contains("999999"));
    }

    #[test]
    fn test_game_with_unknown_participant_fails() {
        let mut json = JsonAdaptedGame::from_model(&game("tennis", "2023-10-10T10:00", "048616"));
        json.participants.push(adapted("Ghost", &["tennis"]));
        let err = json
            .to_model(&SportRegistry::default(), &location_table(), &UniqueEntityList::new())
            .unwrap_err();
        assert!(err.to_string().contains("Ghost"));
    }

    #[test]
    fn test_duplicate_persons_fail_whole_book() {
        let json = JsonSerializableAddressBook {
            persons: vec![
                adapted("Alice Pauline", &["tennis"]),
                adapted("Alice Pauline", &["golf"]),
            ],
            games: vec![],
        };
        let err = json
            .to_model(&SportRegistry::default(), &location_table())
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Data loading error: {}", MESSAGE_DUPLICATE_PERSON));
    }

    #[test]
    fn test_duplicate_games_fail_whole_book() {
        let json = JsonSerializableAddressBook {
            persons: vec![],
            games: vec![
                JsonAdaptedGame::from_model(&game("tennis", "2023-10-10T10:00", "048616")),
                JsonAdaptedGame::from_model(&game("golf", "2023-10-10T10:00", "058357")),
            ],
        };
        let err = json
            .to_model(&SportRegistry::default(), &location_table())
            .unwrap_err();
        assert!(err.to_string().contains(MESSAGE_DUPLICATE_GAME));
    }

    #[test]
    fn test_book_round_trip() {
        let mut book = typical_address_book();
        let carl = book.persons().get(2).unwrap().clone();
        book.add_game(
            game("cricket", "2023-11-01T18:30", "639798")
                .with_participants(vec![carl])
                .unwrap(),
        )
        .unwrap();

        let json = JsonSerializableAddressBook::from_model(&book);
        let restored = json
            .to_model(&SportRegistry::default(), &location_table())
            .unwrap();
        assert_eq!(restored, book);
    }
}
