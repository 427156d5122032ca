// src/application/commands/game_commands.rs
//
// Game Command Handlers
//
// RULES:
// - Games are addressed by their one-based position in the game list
// - Persons are addressed by their position in the displayed person list
// - Roster and location edits replace the stored game in one step

use log::info;

use crate::application::commands::{
    game_at, invalid, location_of, person_at, registered_sport, Index,
};
use crate::application::dto::CommandResult;
use crate::domain::{parse_date_time, Game};
use crate::error::AppResult;
use crate::infrastructure::LocationLookup;
use crate::services::Model;

/// Schedule a new game with an empty roster
pub fn add_game(
    model: &mut dyn Model,
    lookup: &dyn LocationLookup,
    sport: &str,
    date_time: &str,
    postal_code: &str,
) -> AppResult<CommandResult> {
    let sport = registered_sport(model, sport)?;
    let date_time = parse_date_time(date_time).map_err(invalid)?;
    let location = location_of(lookup, postal_code)?;

    let game = Game::new(sport, date_time, location);
    let feedback = format!("New game added: {}", game);

    model.add_game(game)?;
    info!("{}", feedback);
    Ok(CommandResult::new(feedback).with_games(model.games()))
}

pub fn delete_game(model: &mut dyn Model, index: Index) -> AppResult<CommandResult> {
    let game = game_at(model, index)?;

    model.delete_game(&game)?;
    Ok(CommandResult::new(format!("Deleted Game: {}", game)).with_games(model.games()))
}

pub fn add_member(
    model: &mut dyn Model,
    game: Index,
    person: Index,
) -> AppResult<CommandResult> {
    let target = game_at(model, game)?;
    let person = person_at(model, person)?;

    let updated = model.add_member(&target, &person)?;
    Ok(CommandResult::new(format!(
        "Added {} to the game: {}",
        person.name(),
        updated
    ))
    .with_games(model.games()))
}

pub fn delete_member(
    model: &mut dyn Model,
    game: Index,
    person: Index,
) -> AppResult<CommandResult> {
    let target = game_at(model, game)?;
    let person = person_at(model, person)?;

    let updated = model.remove_member(&target, &person)?;
    Ok(CommandResult::new(format!(
        "Removed {} from the game: {}",
        person.name(),
        updated
    ))
    .with_games(model.games()))
}

pub fn edit_game_location(
    model: &mut dyn Model,
    lookup: &dyn LocationLookup,
    game: Index,
    postal_code: &str,
) -> AppResult<CommandResult> {
    let target = game_at(model, game)?;
    let location = location_of(lookup, postal_code)?;

    let updated = model.set_game_location(&target, location)?;
    Ok(CommandResult::new(format!("Edited game location: {}", updated)).with_games(model.games()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::domain::{DomainError, SportRegistry};
    use crate::error::AppError;
    use crate::events::EventBus;
    use crate::infrastructure::MockLocationLookup;
    use crate::services::ModelManager;
    use crate::test_support::{location, location_table, typical_address_book};

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

    fn with_games(model: &mut ModelManager) {
        let table = location_table();
        add_game(model, &table, "tennis", "2030-01-02T08:00", "048616").unwrap();
        add_game(model, &table, "golf", "2030-01-01T08:00", "018956").unwrap();
    }

    #[test]
    fn test_add_game_keeps_list_sorted() {
        let mut model = manager();
        with_games(&mut model);

        let games = model.games();
        assert_eq!(games.len(), 2);
        assert_eq!(games[0].sport().key(), "golf");
        assert_eq!(games[1].sport().key(), "tennis");
    }

    #[test]
    fn test_add_game_at_taken_time_fails() {
        let mut model = manager();
        with_games(&mut model);
        let err = add_game(
            &mut model,
            &location_table(),
            "squash",
            "2030-01-01T08:00",
            "058357",
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::DuplicateEntity(_))));
    }

    #[test]
    fn test_add_game_input_errors() {
        let mut model = manager();
        let table = location_table();
        for (sport, date_time, postal_code) in [
            ("quidditch", "2030-01-01T08:00", "048616"),
            ("tennis", "tomorrow", "048616"),
            ("tennis", "2030-01-01T08:00", "999999"),
        ] {
            let err = add_game(&mut model, &table, sport, date_time, postal_code).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "{}", err);
        }
        assert!(model.games().is_empty());
    }

    #[test]
    fn test_add_game_resolves_location_through_lookup() {
        let mut lookup = MockLocationLookup::new();
        lookup
            .expect_find()
            .times(1)
            .returning(|_| Some(location("520201")));

        let mut model = manager();
        add_game(&mut model, &lookup, "tennis", "2030-01-01T08:00", "520201").unwrap();
        assert_eq!(model.games()[0].location().postal_code, "520201");
    }

    #[test]
    fn test_add_and_delete_member() {
        let mut model = manager();
        with_games(&mut model);

        let result = add_member(&mut model, one(2), one(4)).unwrap();
        assert!(result.feedback.starts_with("Added Daniel Meier to the game"));
        assert_eq!(model.games()[1].participants().len(), 1);

        let err = add_member(&mut model, one(2), one(4)).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::DuplicateEntity(_))));

        delete_member(&mut model, one(2), one(4)).unwrap();
        assert!(model.games()[1].participants().is_empty());
    }

    #[test]
    fn test_delete_member_not_in_roster_fails() {
        let mut model = manager();
        with_games(&mut model);
        let err = delete_member(&mut model, one(1), one(1)).unwrap_err();
        assert!(matches!(err, AppError::Domain(DomainError::EntityNotFound(_))));
    }

    #[test]
    fn test_delete_game() {
        let mut model = manager();
        with_games(&mut model);
        let result = delete_game(&mut model, one(1)).unwrap();
        assert!(result.feedback.starts_with("Deleted Game: golf"));
        assert_eq!(result.games.unwrap().len(), 1);
        assert!(delete_game(&mut model, one(2)).is_err());
    }

    #[test]
    fn test_edit_game_location() {
        let mut model = manager();
        with_games(&mut model);
        add_member(&mut model, one(1), one(7)).unwrap();

        edit_game_location(&mut model, &location_table(), one(1), "639798").unwrap();
        let game = &model.games()[0];
        assert_eq!(game.location().postal_code, "639798");
        assert_eq!(game.participants().len(), 1);
    }
}
