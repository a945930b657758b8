//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for route queries and network listings.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
