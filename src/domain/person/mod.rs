pub mod entity;
pub mod fields;
pub mod invariants;

pub use entity::Person;
pub use fields::{Address, Email, Name, Phone, PostalCode, Tag};
pub use invariants::validate_person;
