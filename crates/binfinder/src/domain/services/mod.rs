//! Domain Services
//!
//! Stateless computations over domain entities.

mod distance;

pub use distance::*;
