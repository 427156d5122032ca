use super::entity::Person;
use crate::domain::{DomainError, DomainResult};

/// Validates all Person invariants
pub fn validate_person(person: &Person) -> DomainResult<()> {
    validate_sports(person)?;
    Ok(())
}

/// A person must play at least one sport
fn validate_sports(person: &Person) -> DomainResult<()> {
    if person.sports().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "{} must play at least one sport",
            person.name()
        )));
    }
    Ok(())
}

/// Critical Person Invariants:
///
/// 1. Every person plays at least one sport (checked on every construction)
/// 2. Identity is the trimmed name, compared exactly ("Bob " == "Bob", "bob" != "Bob")
/// 3. Fields are immutable; edits build a replacement Person
/// 4. Sports are de-duplicated case-insensitively, first occurrence wins
