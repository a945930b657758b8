//! Station adjacency graph.
//!
//! Built once at startup from the line registry plus the virtual-transfer
//! list, then treated as read-only. Every query runs over this one
//! immutable value, so concurrent reads need no locking.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::Station;
use crate::registry::LineRegistry;
use crate::transfers::VirtualTransfers;

/// Undirected adjacency mapping from station to its neighbors.
///
/// Invariant: if A is adjacent to B, B is adjacent to A. A station with no
/// connections is absent from the mapping entirely — "no entry" means
/// "unknown station", and callers must treat it that way.
///
/// Neighbor lists keep insertion order (line declaration order, then stop
/// order, then transfer declaration order) and are not deduplicated: a
/// track segment shared by two lines contributes the same neighbor twice.
/// Traversal relies on membership, never on list position, so duplicates
/// are harmless.
#[derive(Debug, Clone)]
pub struct Graph {
    adjacency: HashMap<Station, Vec<Station>>,
}

impl Graph {
    /// Build the graph from the registry's lines and the virtual transfers.
    ///
    /// Transfers referencing a station that appears on no line are skipped
    /// silently: the bridge list is curated by hand and may mention
    /// stations absent from the loaded data.
    pub fn build(registry: &LineRegistry, transfers: &VirtualTransfers) -> Self {
        let mut adjacency: HashMap<Station, Vec<Station>> = HashMap::new();

        for line in registry.lines() {
            for (a, b) in line.consecutive_pairs() {
                adjacency.entry(a.clone()).or_default().push(b.clone());
                adjacency.entry(b.clone()).or_default().push(a.clone());
            }
        }

        for transfer in transfers.iter() {
            // Both ends must already be on some line; the check happens
            // before either direction is inserted.
            if !adjacency.contains_key(transfer.a.as_str())
                || !adjacency.contains_key(transfer.b.as_str())
            {
                debug!(
                    a = %transfer.a,
                    b = %transfer.b,
                    "skipping virtual transfer with unknown station"
                );
                continue;
            }

            adjacency
                .entry(transfer.a.clone())
                .or_default()
                .push(transfer.b.clone());
            adjacency
                .entry(transfer.b.clone())
                .or_default()
                .push(transfer.a.clone());
        }

        Self { adjacency }
    }

    /// Neighbors of a station, in insertion order.
    ///
    /// `None` means the station is unknown to the network.
    pub fn neighbors(&self, station: &str) -> Option<&[Station]> {
        self.adjacency.get(station).map(Vec::as_slice)
    }

    /// Whether the station appears in the network.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Number of connected stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterate over all known stations (in no particular order).
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.adjacency.keys()
    }
}
