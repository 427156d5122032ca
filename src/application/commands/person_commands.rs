// src/application/commands/person_commands.rs
//
// Person Command Handlers
//
// RULES:
// - Accept raw input
// - Call the Model once
// - Return a CommandResult

use std::collections::BTreeSet;

use log::info;

use crate::application::commands::{invalid, person_at, registered_sport, Index};
use crate::application::dto::{CommandResult, PersonInput};
use crate::domain::{Address, Email, Name, Person, Phone, PostalCode, Sport, Tag};
use crate::error::AppResult;
use crate::services::{Model, PersonFilter, PersonOrder};

/// Add a new person; every sport must be registered
pub fn add_person(model: &mut dyn Model, input: PersonInput) -> AppResult<CommandResult> {
    let person = person_from_input(model, input)?;
    let feedback = format!("New person added: {}", person);

    model.add_person(person)?;
    info!("{}", feedback);
    Ok(CommandResult::new(feedback))
}

/// Delete the person at `index` of the displayed list
pub fn delete_person(model: &mut dyn Model, index: Index) -> AppResult<CommandResult> {
    let person = person_at(model, index)?;

    model.delete_person(&person)?;
    Ok(CommandResult::new(format!("Deleted Person: {}", person)))
}

/// Clear any filter and show every person
pub fn list_persons(model: &mut dyn Model) -> AppResult<CommandResult> {
    model.update_person_filter(PersonFilter::All, PersonOrder::Insertion);
    Ok(CommandResult::new("Listed all persons").with_persons(model.filtered_persons()))
}

fn person_from_input(model: &dyn Model, input: PersonInput) -> AppResult<Person> {
    let tags = input
        .tags
        .iter()
        .map(|t| Tag::new(t).map_err(invalid))
        .collect::<AppResult<BTreeSet<Tag>>>()?;
    let sports = input
        .sports
        .iter()
        .map(|s| registered_sport(model, s))
        .collect::<AppResult<Vec<Sport>>>()?;

    Person::new(
        Name::new(&input.name).map_err(invalid)?,
        Phone::new(&input.phone).map_err(invalid)?,
        Email::new(&input.email).map_err(invalid)?,
        Address::new(&input.address).map_err(invalid)?,
        PostalCode::new(&input.postal_code).map_err(invalid)?,
        tags,
        sports,
    )
    .map_err(invalid)
}
