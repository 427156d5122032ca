use std::collections::BTreeSet;

use super::fields::{Address, Email, Name, Phone, PostalCode, Tag};
use super::invariants::validate_person;
use crate::domain::sport::Sport;
use crate::domain::unique_list::Identifiable;
use crate::domain::DomainResult;

/// A contact who plays one or more sports.
///
/// Persons are never edited in place: every change builds a new Person that
/// replaces the old one in the address book.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    postal_code: PostalCode,
    tags: BTreeSet<Tag>,
    /// Never empty; ordered, de-duplicated case-insensitively
    sports: Vec<Sport>,
}

impl Person {
    /// The only way to construct a Person; fails if `sports` is empty
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        postal_code: PostalCode,
        tags: BTreeSet<Tag>,
        sports: Vec<Sport>,
    ) -> DomainResult<Self> {
        let person = Self {
            name,
            phone,
            email,
            address,
            postal_code,
            tags,
            sports: dedup_sports(sports),
        };
        validate_person(&person)?;
        Ok(person)
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    pub fn plays(&self, sport: &Sport) -> bool {
        self.sports.contains(sport)
    }

    /// True if any sport matches any keyword, case-insensitively
    pub fn plays_any<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords
            .iter()
            .any(|k| self.sports.iter().any(|s| s.matches(k.as_ref())))
    }

    /// New Person with `sports` appended (duplicates ignored)
    pub fn with_sports_added(&self, sports: Vec<Sport>) -> DomainResult<Self> {
        let mut combined = self.sports.clone();
        combined.extend(sports);
        self.with_sports(combined)
    }

    /// New Person without `sport`; fails if it was the last one
    pub fn with_sport_removed(&self, sport: &Sport) -> DomainResult<Self> {
        let remaining = self
            .sports
            .iter()
            .filter(|s| *s != sport)
            .cloned()
            .collect();
        self.with_sports(remaining)
    }

    pub fn with_sports(&self, sports: Vec<Sport>) -> DomainResult<Self> {
        Person::new(
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
            self.postal_code.clone(),
            self.tags.clone(),
            sports,
        )
    }
}

impl Identifiable for Person {
    const KIND: &'static str = "person";

    /// Exact, case-sensitive match on the (trimmed) name
    fn is_same_identity(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn identity_label(&self) -> String {
        self.name.to_string()
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sports: Vec<&str> = self.sports.iter().map(|s| s.name()).collect();
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Postal code: {}; Sports: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.postal_code,
            sports.join(", ")
        )?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(|t| t.as_str()).collect();
            write!(f, "; Tags: {}", tags.join(", "))?;
        }
        Ok(())
    }
}

fn dedup_sports(sports: Vec<Sport>) -> Vec<Sport> {
    let mut unique: Vec<Sport> = Vec::with_capacity(sports.len());
    for sport in sports {
        if !unique.contains(&sport) {
            unique.push(sport);
        }
    }
    unique
}
