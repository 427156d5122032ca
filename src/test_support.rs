// src/test_support.rs
//
// Shared fixtures for unit tests.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDateTime;

use crate::domain::{
    Address, AddressBook, DomainResult, Email, Game, GeoLocation, Name, Person, Phone,
    PostalCode, Sport, Tag, DATE_TIME_FORMAT,
};
use crate::infrastructure::{JsonLocationTable, LocationEntry};

/// Known postal codes: (code, address, latitude, longitude)
pub const LOCATIONS: &[(&str, &str, f64, f64)] = &[
    ("048616", "1 Raffles Place", 1.2789, 103.8537),
    ("058357", "Chinatown Point", 1.2823, 103.8528),
    ("018956", "Marina Bay Sands", 1.2834, 103.8607),
    ("238801", "Orchard Road", 1.3040, 103.8318),
    ("119077", "Kent Ridge", 1.2966, 103.7764),
    ("520201", "Tampines Central", 1.3530, 103.9450),
    ("639798", "Nanyang Avenue", 1.3483, 103.6831),
];

pub fn location(postal_code: &str) -> GeoLocation {
    let (code, address, lat, lon) = LOCATIONS
        .iter()
        .find(|(code, ..)| *code == postal_code)
        .copied()
        .unwrap_or_else(|| panic!("no fixture location for {}", postal_code));
    GeoLocation::new(code.to_string(), address.to_string(), lat, lon)
}

pub fn location_table() -> JsonLocationTable {
    let entries: HashMap<String, LocationEntry> = LOCATIONS
        .iter()
        .map(|(code, address, latitude, longitude)| {
            (
                code.to_string(),
                LocationEntry {
                    address: address.to_string(),
                    latitude: *latitude,
                    longitude: *longitude,
                },
            )
        })
        .collect();
    JsonLocationTable::from_entries(entries)
}

pub fn at(date_time: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(date_time, DATE_TIME_FORMAT).unwrap()
}

pub fn sports(names: &[&str]) -> Vec<Sport> {
    names.iter().map(|n| Sport::new(n).unwrap()).collect()
}

pub fn game(sport: &str, date_time: &str, postal_code: &str) -> Game {
    Game::new(Sport::new(sport).unwrap(), at(date_time), location(postal_code))
}

pub struct PersonBuilder {
    name: String,
    phone: String,
    email: String,
    address: String,
    postal_code: String,
    tags: Vec<String>,
    sports: Vec<String>,
}

impl PersonBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            phone: "85355255".to_string(),
            email: "amy@gmail.com".to_string(),
            address: "123, Jurong West Ave 6, #08-111".to_string(),
            postal_code: "048616".to_string(),
            tags: Vec::new(),
            sports: vec!["tennis".to_string()],
        }
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn postal_code(mut self, postal_code: &str) -> Self {
        self.postal_code = postal_code.to_string();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn sports(mut self, sports: &[&str]) -> Self {
        self.sports = sports.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> DomainResult<Person> {
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::new(t))
            .collect::<DomainResult<BTreeSet<Tag>>>()?;
        let sports = self
            .sports
            .iter()
            .map(|s| Sport::new(s))
            .collect::<DomainResult<Vec<Sport>>>()?;
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

pub fn person(name: &str, sports: &[&str]) -> Person {
    PersonBuilder::new(name).sports(sports).build().unwrap()
}

/// Seven persons; exactly Carl (cricket) and Daniel (tennis) match
/// "cricket" or "tennis"
pub fn typical_persons() -> Vec<Person> {
    vec![
        PersonBuilder::new("Alice Pauline")
            .phone("94351253")
            .email("alice@example.com")
            .postal_code("048616")
            .tags(&["friends"])
            .sports(&["badminton"])
            .build()
            .unwrap(),
        PersonBuilder::new("Benson Meier")
            .phone("98765432")
            .email("johnd@example.com")
            .postal_code("238801")
            .tags(&["owesMoney", "friends"])
            .sports(&["football", "basketball"])
            .build()
            .unwrap(),
        PersonBuilder::new("Carl Kurz")
            .phone("95352563")
            .email("heinz@example.com")
            .postal_code("639798")
            .sports(&["Cricket"])
            .build()
            .unwrap(),
        PersonBuilder::new("Daniel Meier")
            .phone("87652533")
            .email("cornelia@example.com")
            .postal_code("058357")
            .tags(&["friends"])
            .sports(&["tennis", "squash"])
            .build()
            .unwrap(),
        PersonBuilder::new("Elle Meyer")
            .phone("94822245")
            .email("werner@example.com")
            .postal_code("520201")
            .sports(&["volleyball"])
            .build()
            .unwrap(),
        PersonBuilder::new("Fiona Kunz")
            .phone("94824275")
            .email("lydia@example.com")
            .postal_code("119077")
            .sports(&["swimming"])
            .build()
            .unwrap(),
        PersonBuilder::new("George Best")
            .phone("94824425")
            .email("anna@example.com")
            .postal_code("018956")
            .sports(&["running", "golf"])
            .build()
            .unwrap(),
    ]
}

pub fn typical_address_book() -> AddressBook {
    AddressBook::from_parts(typical_persons(), Vec::new()).unwrap()
}
