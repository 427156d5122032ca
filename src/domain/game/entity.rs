use std::cmp::Ordering;

use chrono::{NaiveDateTime, Timelike};

use crate::domain::location::GeoLocation;
use crate::domain::person::Person;
use crate::domain::sport::Sport;
use crate::domain::unique_list::{Identifiable, UniqueEntityList};
use crate::domain::{DomainError, DomainResult};

/// Display/storage format for a game's scheduled instant
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

const DATE_TIME_WITH_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses an ISO-8601 local date-time, with or without seconds
pub fn parse_date_time(value: &str) -> DomainResult<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATE_TIME_WITH_SECONDS_FORMAT))
        .map_err(|_| {
            DomainError::InvalidArgument(format!(
                "Invalid date-time '{}', expected YYYY-MM-DDTHH:MM",
                value
            ))
        })
}

/// ISO-8601 local form; seconds only when non-zero
pub fn format_date_time(date_time: &NaiveDateTime) -> String {
    if date_time.second() == 0 {
        date_time.format(DATE_TIME_FORMAT).to_string()
    } else {
        date_time.format(DATE_TIME_WITH_SECONDS_FORMAT).to_string()
    }
}

/// A scheduled game: a sport, a time, a place and a roster.
///
/// Identity is the scheduled instant alone; no two games may share one.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    sport: Sport,
    date_time: NaiveDateTime,
    location: GeoLocation,
    participants: UniqueEntityList<Person>,
}

impl Game {
    /// New game with an empty roster
    pub fn new(sport: Sport, date_time: NaiveDateTime, location: GeoLocation) -> Self {
        Self {
            sport,
            date_time,
            location,
            participants: UniqueEntityList::new(),
        }
    }

    /// Fails if two participants share an identity
    pub fn with_participants(mut self, participants: Vec<Person>) -> DomainResult<Self> {
        self.participants.set_all(participants)?;
        Ok(self)
    }

    pub fn sport(&self) -> &Sport {
        &self.sport
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn participants(&self) -> &UniqueEntityList<Person> {
        &self.participants
    }

    pub fn has_participant(&self, person: &Person) -> bool {
        self.participants.contains(person)
    }

    /// Moves the game; the only field edited in place
    pub fn set_location(&mut self, location: GeoLocation) {
        self.location = location;
    }

    pub fn with_location(&self, location: GeoLocation) -> Self {
        let mut game = self.clone();
        game.set_location(location);
        game
    }

    pub fn with_participant_added(&self, person: Person) -> DomainResult<Self> {
        let mut game = self.clone();
        game.participants.add(person)?;
        Ok(game)
    }

    pub fn with_participant_removed(&self, person: &Person) -> DomainResult<Self> {
        let mut game = self.clone();
        game.participants.remove(person)?;
        Ok(game)
    }

    /// Same game with `target` swapped for `replacement` in the roster
    pub fn with_participant_replaced(
        &self,
        target: &Person,
        replacement: Person,
    ) -> DomainResult<Self> {
        let mut game = self.clone();
        game.participants.replace(target, replacement)?;
        Ok(game)
    }

    /// Ascending by scheduled instant; the game list's sort order
    pub fn cmp_by_date_time(a: &Game, b: &Game) -> Ordering {
        a.date_time.cmp(&b.date_time)
    }
}

impl Identifiable for Game {
    const KIND: &'static str = "game";

    fn is_same_identity(&self, other: &Self) -> bool {
        self.date_time == other.date_time
    }

    fn identity_label(&self) -> String {
        format!("at {}", format_date_time(&self.date_time))
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} on {} at {}; {} participant(s)",
            self.sport,
            self.date_time.format("%Y-%m-%d %H:%M"),
            self.location,
            self.participants.len()
        )
    }
}
