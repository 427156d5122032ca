// src/error/mod.rs
//
// Application-wide error type. Domain errors convert into it at the
// service boundary.

pub mod types;

pub use types::{AppError, AppResult};
