//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Station;
use crate::planner::RoutePlan;

/// Query parameters for a route request.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin station name
    pub from: Option<String>,

    /// Destination station name
    pub to: Option<String>,
}

/// A planned route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    /// Origin as requested
    pub from: String,

    /// Destination as requested
    pub to: String,

    /// Number of stops beyond the origin
    pub stops: usize,

    /// Stop sequence from origin to destination inclusive
    pub route: Vec<String>,

    /// Line per consecutive stop pair; null where no line serves the
    /// segment (virtual transfer crossings)
    pub segment_lines: Vec<Option<String>>,

    /// Stations where the serving line changes
    pub transfer_stations: Vec<String>,
}

/// Known stations in the network.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Station names, sorted
    pub stations: Vec<String>,
}

/// One line and its stop sequence.
#[derive(Debug, Serialize)]
pub struct LineSummary {
    /// Line name
    pub name: String,

    /// Stops in physical order
    pub stations: Vec<String>,
}

/// All lines, in registry order.
#[derive(Debug, Serialize)]
pub struct LineListResponse {
    /// Line summaries
    pub lines: Vec<LineSummary>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl RouteResponse {
    /// Create from a planned route.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            from: plan.from.as_str().to_string(),
            to: plan.to.as_str().to_string(),
            stops: plan.stops(),
            route: station_names(&plan.route),
            segment_lines: plan.segment_lines.clone(),
            transfer_stations: station_names(&plan.transfer_stations),
        }
    }
}

fn station_names(stations: &[Station]) -> Vec<String> {
    stations.iter().map(|s| s.as_str().to_string()).collect()
}
