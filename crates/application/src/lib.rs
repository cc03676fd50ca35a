//! Application layer - Use cases and orchestration
//!
//! Contains the voice translation pipeline and the ports it drives.
//! Adapters for the ports live in the infrastructure layer.

pub mod error;
pub mod fallback;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
