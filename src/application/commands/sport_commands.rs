// src/application/commands/sport_commands.rs
//
// Sport Command Handlers
//
// Two groups:
// - Per-person sports (AddSport, DeleteSport)
// - The global registry and sport searches

use log::info;

use crate::application::commands::{invalid, location_of, person_at, registered_sport, Index};
use crate::application::dto::CommandResult;
use crate::domain::{CreateOutcome, Sport};
use crate::error::{AppError, AppResult};
use crate::infrastructure::LocationLookup;
use crate::services::{Model, PersonFilter, PersonOrder};

// ============================================================================
// PERSON SPORTS
// ============================================================================

pub fn add_sports_to_person(
    model: &mut dyn Model,
    index: Index,
    sports: &[String],
) -> AppResult<CommandResult> {
    if sports.is_empty() {
        return Err(AppError::invalid_input("At least one sport must be given"));
    }
    let person = person_at(model, index)?;
    let sports = sports
        .iter()
        .map(|s| registered_sport(model, s))
        .collect::<AppResult<Vec<Sport>>>()?;

    let edited = person.with_sports_added(sports).map_err(invalid)?;
    let feedback = format!("Updated sports of {}: {}", edited.name(), sport_list(edited.sports()));

    model.set_person(&person, edited)?;
    Ok(CommandResult::new(feedback))
}

/// Fails when `sport` is the person's last one
pub fn delete_sport_from_person(
    model: &mut dyn Model,
    index: Index,
    sport: &str,
) -> AppResult<CommandResult> {
    let person = person_at(model, index)?;
    let sport = Sport::new(sport).map_err(invalid)?;
    if !person.plays(&sport) {
        return Err(AppError::invalid_input(format!(
            "{} does not play {}",
            person.name(),
            sport
        )));
    }

    let edited = person.with_sport_removed(&sport)?;
    let feedback = format!("Deleted sport {} from {}", sport.key(), edited.name());

    model.set_person(&person, edited)?;
    Ok(CommandResult::new(feedback))
}

// ============================================================================
// GLOBAL SPORT LIST
// ============================================================================

/// A duplicate name is reported, not treated as an error
pub fn create_sport(model: &mut dyn Model, name: &str) -> AppResult<CommandResult> {
    let key = Sport::new(name).map_err(invalid)?.key();

    let feedback = match model.create_sport(name)? {
        CreateOutcome::Accepted => {
            info!("Sport '{}' created", key);
            format!("New sport created: {}", key)
        }
        CreateOutcome::Rejected => format!("Sport already exists: {}", key),
    };
    Ok(CommandResult::new(feedback).with_sports(model.sport_registry().sports()))
}

pub fn delete_global_sport(model: &mut dyn Model, name: &str) -> AppResult<CommandResult> {
    let key = Sport::new(name).map_err(invalid)?.key();

    model.delete_sport(name)?;
    Ok(CommandResult::new(format!("Deleted sport: {}", key))
        .with_sports(model.sport_registry().sports()))
}

pub fn list_sports(model: &mut dyn Model) -> AppResult<CommandResult> {
    let sports = model.sport_registry().sports();
    Ok(CommandResult::new(format!("{} sports available", sports.len())).with_sports(sports))
}

// ============================================================================
// SEARCH
// ============================================================================

/// Persons playing any of `keywords`, alphabetically
pub fn find_sport(model: &mut dyn Model, keywords: Vec<String>) -> AppResult<CommandResult> {
    let keywords = check_keywords(keywords)?;
    model.update_person_filter(PersonFilter::SportKeywords(keywords), PersonOrder::Name);
    Ok(listed(model))
}

/// Persons playing any of `keywords`, nearest to `postal_code` first
pub fn find_sport_by_distance(
    model: &mut dyn Model,
    lookup: &dyn LocationLookup,
    keywords: Vec<String>,
    postal_code: &str,
) -> AppResult<CommandResult> {
    let keywords = check_keywords(keywords)?;
    let origin = location_of(lookup, postal_code)?;
    model.update_person_filter(
        PersonFilter::SportKeywords(keywords),
        PersonOrder::DistanceFrom(origin),
    );
    Ok(listed(model))
}

fn check_keywords(keywords: Vec<String>) -> AppResult<Vec<String>> {
    let keywords: Vec<String> = keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .collect();
    if keywords.is_empty() {
        return Err(AppError::invalid_input("At least one sport keyword must be given"));
    }
    Ok(keywords)
}

fn listed(model: &dyn Model) -> CommandResult {
    let persons = model.filtered_persons();
    CommandResult::new(format!("{} persons listed!", persons.len())).with_persons(persons)
}

fn sport_list(sports: &[Sport]) -> String {
    sports
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::{DomainError, SportRegistry};
    use crate::events::EventBus;
    use crate::services::ModelManager;
    use crate::test_support::{game, location_table, typical_address_book};

    fn manager() -> ModelManager {
        ModelManager::new(
            typical_address_book(),
            SportRegistry::default(),
            Arc::new(location_table()),
            Arc::new(EventBus::new()),
        )
    }

    fn one(n: usize) -> Index {
        Index::from_one_based(n).unwrap()
    }

    fn names(result: &CommandResult) -> Vec<String> {
        result
            .persons
            .as_ref()
            .unwrap()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }

    #[test]
    fn test_find_sport() {
        let mut model = manager();
        let result = find_sport(&mut model, vec!["Cricket".into(), "tennis".into()]).unwrap();
        assert_eq!(result.feedback, "2 persons listed!");
        assert_eq!(names(&result), vec!["Carl Kurz", "Daniel Meier"]);
    }

    #[test]
    fn test_find_sport_without_keywords_fails() {
        let mut model = manager();
        assert!(matches!(
            find_sport(&mut model, vec!["  ".into()]),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_find_sport_by_distance() {
        let mut model = manager();
        let table = location_table();
        let result = find_sport_by_distance(
            &mut model,
            &table,
            vec!["football".into(), "swimming".into(), "volleyball".into()],
            "119077",
        )
        .unwrap();
        // Kent Ridge, then Orchard, then Tampines
        assert_eq!(names(&result), vec!["Fiona Kunz", "Benson Meier", "Elle Meyer"]);
    }

    #[test]
    fn test_find_sport_by_distance_unknown_origin() {
        let mut model = manager();
        let err = find_sport_by_distance(&mut model, &location_table(), vec!["golf".into()], "999999")
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_add_sports_to_person() {
        let mut model = manager();
        add_sports_to_person(&mut model, one(3), &["tennis".into(), "CRICKET".into()]).unwrap();

        let carl = model.address_book().persons().get(2).unwrap();
        let keys: Vec<String> = carl.sports().iter().map(|s| s.key()).collect();
        assert_eq!(keys, vec!["cricket", "tennis"]);
    }

    #[test]
    fn test_add_unregistered_sport_to_person_fails() {
        let mut model = manager();
        let before = model.address_book().clone();
        let err = add_sports_to_person(&mut model, one(1), &["quidditch".into()]).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(model.address_book(), &before);
    }

    #[test]
    fn test_delete_last_sport_from_person_fails() {
        let mut model = manager();
        let err = delete_sport_from_person(&mut model, one(3), "cricket").unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::InvariantViolation(_))));
        assert_eq!(model.address_book().persons().get(2).unwrap().sports().len(), 1);
    }

    #[test]
    fn test_delete_sport_from_person() {
        let mut model = manager();
        let result = delete_sport_from_person(&mut model, one(4), "Squash").unwrap();
        assert_eq!(result.feedback, "Deleted sport squash from Daniel Meier");
        assert!(delete_sport_from_person(&mut model, one(4), "golf").is_err());
    }

    #[test]
    fn test_create_sport_twice() {
        let mut model = manager();
        let first = create_sport(&mut model, "Frisbee").unwrap();
        assert_eq!(first.feedback, "New sport created: frisbee");
        assert!(first.sports.unwrap().contains(&"frisbee".to_string()));

        let second = create_sport(&mut model, "frisbee ").unwrap();
        assert_eq!(second.feedback, "Sport already exists: frisbee");
    }

    #[test]
    fn test_delete_global_sport() {
        let mut model = manager();
        create_sport(&mut model, "frisbee").unwrap();
        delete_global_sport(&mut model, "frisbee").unwrap();
        assert!(!model.sport_registry().is_valid("frisbee").unwrap());

        let err = delete_global_sport(&mut model, "frisbee").unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::EntityNotFound(_))));
    }

    #[test]
    fn test_delete_global_sport_in_use_by_game_fails() {
        let mut model = manager();
        model
            .add_game(game("squash", "2030-01-01T08:00", "048616"))
            .unwrap();
        assert!(delete_global_sport(&mut model, "squash").is_err());
    }

    #[test]
    fn test_list_sports() {
        let mut model = manager();
        let result = list_sports(&mut model).unwrap();
        assert_eq!(result.feedback, "12 sports available");
        assert_eq!(result.sports.unwrap()[0], "badminton");
    }
}
