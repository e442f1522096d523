//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external providers.
//!
//! Implementations of these traits live in the infrastructure crates.

pub mod services;

// Re-exports
pub use services::*;
