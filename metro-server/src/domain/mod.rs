//! Domain types for the metro route planner.
//!
//! These types represent validated network data. Invariants are enforced
//! at construction time, so code that receives them can trust their
//! validity.

mod line;
mod station;

pub use line::Line;
pub use station::{InvalidStation, Station};
