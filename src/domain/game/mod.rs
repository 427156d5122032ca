//! Critical Game Invariants:
//!
//! 1. Identity is the scheduled instant alone (sport and place are ignored)
//! 2. Participants are pairwise distinct persons
//! 3. Location is the only field that may change in place
//! 4. Roster edits produce a replacement Game that is swapped in atomically

pub mod entity;

pub use entity::{format_date_time, parse_date_time, Game, DATE_TIME_FORMAT};
