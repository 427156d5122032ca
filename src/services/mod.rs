// src/services/mod.rs
//
// Services Module - Model layer over the address book and sport registry

pub mod model;
pub mod model_manager;

pub use model::{Model, PersonFilter, PersonOrder};
pub use model_manager::ModelManager;
