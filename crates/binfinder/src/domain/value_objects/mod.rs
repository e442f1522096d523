//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod rank_by;
mod rating;
mod waste_category;

pub use rank_by::*;
pub use rating::*;
pub use waste_category::*;
