#![deny(missing_docs)]
#![doc = "Core data model for the hypergrid sweep driver: ordered parameter tables, concrete parameter tuples, and the structured error surface shared across crates."]

pub mod errors;
mod params;

pub use errors::{ErrorInfo, GridError};
pub use params::{ParamTuple, ParamValue, ParameterTable, Slot};
