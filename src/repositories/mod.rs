// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic beyond re-validating what they load
// - NO event emission
// - A load either produces a whole address book or fails

pub mod address_book_repository;
pub mod json_adapted;

pub use address_book_repository::{
    AddressBookRepository, JsonAddressBookRepository, DEFAULT_ADDRESS_BOOK_PATH,
};
pub use json_adapted::{JsonAdaptedGame, JsonAdaptedPerson, JsonSerializableAddressBook};
