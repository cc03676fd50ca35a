//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Direction tag is not one of the supported language pairs
    #[error("Unknown translation direction: {0} (expected 'en-ru' or 'ru-en')")]
    UnknownDirection(String),
}
