//! Unweighted shortest-path search.
//!
//! Breadth-first search over partial paths: the frontier holds whole
//! candidate paths rather than bare stations, and the first path to reach
//! the goal is returned. Because the frontier is a strict FIFO and path
//! lengths are non-decreasing, that first hit has minimum edge count.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::Station;
use crate::graph::Graph;

/// Find a shortest route from `start` to `end`, in edge-count terms.
///
/// Returns the full stop sequence including both endpoints, `[start]` when
/// the two are equal, or an empty vec when no path exists.
///
/// Stations are only finalized when a path is dequeued, not when neighbors
/// are enqueued; a neighbor already visited still gets its path enqueued
/// and is discarded later. This grows the frontier faster than a
/// predecessor-map search would, but it is what pins down the tie-break
/// order, so it stays as is.
///
/// For a fixed graph the result is deterministic: neighbor lists are in
/// insertion order and the frontier is a strict FIFO.
pub fn find_route(graph: &Graph, start: &Station, end: &Station) -> Vec<Station> {
    let mut frontier: VecDeque<Vec<Station>> = VecDeque::new();
    frontier.push_back(vec![start.clone()]);

    let mut seen: HashSet<Station> = HashSet::new();

    while let Some(path) = frontier.pop_front() {
        let Some(node) = path.last() else {
            continue;
        };

        if node == end {
            debug!(from = %start, to = %end, len = path.len(), "route found");
            return path;
        }

        // Already finalized via a shorter or equal path
        if !seen.insert(node.clone()) {
            continue;
        }

        trace!(station = %node, frontier = frontier.len(), "exploring station");

        if let Some(neighbors) = graph.neighbors(node.as_str()) {
            for neighbor in neighbors {
                let mut next = path.clone();
                next.push(neighbor.clone());
                frontier.push_back(next);
            }
        }
    }

    debug!(from = %start, to = %end, "frontier exhausted, no route");
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::LineRegistry;
    use crate::transfers::VirtualTransfers;

    fn station(s: &str) -> Station {
        Station::parse(s).unwrap()
    }

    fn graph(json: &str) -> Graph {
        Graph::build(
            &LineRegistry::from_json_str(json).unwrap(),
            &VirtualTransfers::new(),
        )
    }

    fn names(route: &[Station]) -> Vec<&str> {
        route.iter().map(Station::as_str).collect()
    }

    #[test]
    fn straight_run_across_two_lines() {
        let g = graph(r#"{ "Red": ["A", "B", "C"], "Blue": ["C", "D", "E"] }"#);

        let route = find_route(&g, &station("A"), &station("E"));
        assert_eq!(names(&route), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn same_start_and_end() {
        let g = graph(r#"{ "Red": ["A", "B"] }"#);

        let route = find_route(&g, &station("A"), &station("A"));
        assert_eq!(names(&route), vec!["A"]);
    }

    #[test]
    fn disconnected_components_yield_empty() {
        let g = graph(r#"{ "Red": ["A", "B"], "Green": ["X", "Y"] }"#);

        assert!(find_route(&g, &station("A"), &station("Y")).is_empty());
    }

    #[test]
    fn unknown_station_yields_empty() {
        let g = graph(r#"{ "Red": ["A", "B"] }"#);

        assert!(find_route(&g, &station("Nowhere"), &station("B")).is_empty());
        assert!(find_route(&g, &station("A"), &station("Nowhere")).is_empty());
    }

    #[test]
    fn crosses_virtual_transfer() {
        let registry = LineRegistry::from_json_str(r#"{ "Red": ["A", "B"], "Blue": ["C", "D"] }"#)
            .unwrap();
        let mut transfers = VirtualTransfers::new();
        transfers.add(station("B"), station("C"), "footbridge");
        let g = Graph::build(&registry, &transfers);

        let route = find_route(&g, &station("A"), &station("D"));
        assert_eq!(names(&route), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn picks_shorter_of_two_routes() {
        let g = graph(r#"{ "Slow": ["A", "P", "Q", "B"], "Fast": ["A", "X", "B"] }"#);

        let route = find_route(&g, &station("A"), &station("B"));
        assert_eq!(names(&route), vec!["A", "X", "B"]);
    }

    #[test]
    fn equal_length_tie_goes_to_first_declared_line() {
        // Both lines offer a 2-edge route; the first line's edges were
        // inserted first, so its intermediate station wins.
        let g = graph(r#"{ "First": ["A", "X", "B"], "Second": ["A", "Y", "B"] }"#);

        let route = find_route(&g, &station("A"), &station("B"));
        assert_eq!(names(&route), vec!["A", "X", "B"]);
    }

    #[test]
    fn tolerates_cycles() {
        let g = graph(r#"{ "Ring": ["A", "B", "C", "D", "A"] }"#);

        // Around the ring the short way
        let route = find_route(&g, &station("B"), &station("A"));
        assert_eq!(names(&route), vec!["B", "A"]);
    }
}
