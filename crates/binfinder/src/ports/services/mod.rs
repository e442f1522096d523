//! Service Ports
//!
//! Abstract interfaces for external services.

mod classifier;
mod geocoding;
mod places;

pub use classifier::*;
pub use geocoding::*;
pub use places::*;
