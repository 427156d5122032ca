pub mod entity;
pub mod registry;

pub use entity::Sport;
pub use registry::{CreateOutcome, SportRegistry, DEFAULT_REGISTRY_PATH, DEFAULT_SPORTS};
