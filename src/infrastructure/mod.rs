// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod location_table;

pub use location_table::{
    resolve_location, JsonLocationTable, LocationEntry, LocationLookup,
    DEFAULT_LOCATION_TABLE_PATH,
};

#[cfg(test)]
pub use location_table::MockLocationLookup;
