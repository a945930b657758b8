//! Route planner for the metro network.
//!
//! Answers: "what is the shortest route between these two stations, which
//! line do I ride on each leg, and where do I change?" The planner owns
//! the immutable graph and registry, validates query inputs, and runs the
//! BFS router plus the itinerary annotator.

mod bfs;
mod itinerary;

pub use bfs::find_route;
pub use itinerary::{annotate_lines, find_transfers, line_connecting};

use tracing::debug;

use crate::domain::Station;
use crate::graph::Graph;
use crate::registry::LineRegistry;
use crate::transfers::VirtualTransfers;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// One of the two station parameters was absent or empty
    #[error("missing from or to parameter")]
    MissingParameter,

    /// Station name is not present in the network
    #[error("unknown station: {name}")]
    UnknownStation { name: String },

    /// Both stations exist but no path connects them
    #[error("no route found between {from} and {to}")]
    NoRouteFound { from: String, to: String },
}

/// A planned route between two stations.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    /// Requested origin.
    pub from: Station,

    /// Requested destination.
    pub to: Station,

    /// Stop sequence from origin to destination inclusive, no repeats.
    /// Always non-empty; a query from a station to itself yields just
    /// that station.
    pub route: Vec<Station>,

    /// One entry per consecutive route pair: the line serving that
    /// segment, or `None` when the segment crosses a virtual transfer.
    pub segment_lines: Vec<Option<String>>,

    /// Interior stations where the serving line changes.
    pub transfer_stations: Vec<Station>,
}

impl RoutePlan {
    /// Number of stops beyond the origin.
    pub fn stops(&self) -> usize {
        self.route.len().saturating_sub(1)
    }
}

/// The planner: immutable graph and registry plus the query logic.
///
/// Built once at startup and shared read-only across request handlers;
/// planning never mutates, so no locking is needed.
pub struct RoutePlanner {
    registry: LineRegistry,
    graph: Graph,
}

impl RoutePlanner {
    /// Build a planner over the given registry and virtual transfers.
    pub fn new(registry: LineRegistry, transfers: &VirtualTransfers) -> Self {
        let graph = Graph::build(&registry, transfers);
        Self { registry, graph }
    }

    /// Plan a shortest route from `from` to `to`.
    ///
    /// Validation happens up front: an empty name is a missing parameter,
    /// and a name with no graph entry is an unknown station — the router
    /// never runs for either.
    pub fn plan(&self, from: &str, to: &str) -> Result<RoutePlan, PlanError> {
        let from = Station::parse(from).map_err(|_| PlanError::MissingParameter)?;
        let to = Station::parse(to).map_err(|_| PlanError::MissingParameter)?;

        if !self.graph.contains(from.as_str()) {
            return Err(PlanError::UnknownStation {
                name: from.as_str().to_string(),
            });
        }
        if !self.graph.contains(to.as_str()) {
            return Err(PlanError::UnknownStation {
                name: to.as_str().to_string(),
            });
        }

        let route = find_route(&self.graph, &from, &to);
        if route.is_empty() {
            return Err(PlanError::NoRouteFound {
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            });
        }

        let segment_lines = annotate_lines(&route, &self.registry);
        let transfer_stations = find_transfers(&route, &segment_lines);

        debug!(
            from = %from,
            to = %to,
            stops = route.len() - 1,
            transfers = transfer_stations.len(),
            "route planned"
        );

        Ok(RoutePlan {
            from,
            to,
            route,
            segment_lines,
            transfer_stations,
        })
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The underlying line registry.
    pub fn registry(&self) -> &LineRegistry {
        &self.registry
    }
}
