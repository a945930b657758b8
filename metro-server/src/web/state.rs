//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::RoutePlanner;

/// Shared application state.
///
/// The planner is built once at startup and read-only afterward, so
/// cloning the state is an `Arc` bump and handlers never take a lock.
#[derive(Clone)]
pub struct AppState {
    /// Route planner over the immutable network
    pub planner: Arc<RoutePlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(planner: RoutePlanner) -> Self {
        Self {
            planner: Arc::new(planner),
        }
    }
}
