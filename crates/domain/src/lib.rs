//! Domain layer for the voice translator
//!
//! Contains the translation direction, the languages it pairs, accent
//! variants and domain errors. This layer has no I/O and defines the
//! ubiquitous language used by the other crates.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
