// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the model
// - It provides the boundary between the command loop and the Model
// - It turns raw input into validated domain values
// - It persists the address book and registry after each mutation

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::{Command, Index};
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
