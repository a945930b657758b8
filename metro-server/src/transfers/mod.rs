//! Virtual transfers between stations.
//!
//! Some stations are physically linked but named differently across lines
//! (footbridges, shared concourses), so no line's stop sequence connects
//! them. This module holds manually curated bridges that make such pairs
//! adjacent in the graph.
//!
//! Bridging is an explicit curation mechanism: station matching everywhere
//! else stays exact, and no fuzzy name matching is attempted.

use crate::domain::Station;

/// A manually declared adjacency between two stations.
///
/// The pair is unordered: a transfer between A and B also bridges B and A.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualTransfer {
    /// One end of the bridge.
    pub a: Station,

    /// The other end.
    pub b: Station,

    /// Human-readable description of the physical link.
    pub note: String,
}

/// A collection of virtual transfers, in declaration order.
///
/// Declaration order is kept because graph edges are inserted in this
/// order, which pins down neighbor ordering and therefore route
/// determinism.
#[derive(Debug, Clone, Default)]
pub struct VirtualTransfers {
    transfers: Vec<VirtualTransfer>,
}

impl VirtualTransfers {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transfer between two stations.
    pub fn add(&mut self, a: Station, b: Station, note: impl Into<String>) {
        self.transfers.push(VirtualTransfer {
            a,
            b,
            note: note.into(),
        });
    }

    /// Whether the two stations are bridged, in either orientation.
    pub fn is_bridged(&self, a: &Station, b: &Station) -> bool {
        self.transfers
            .iter()
            .any(|t| (&t.a == a && &t.b == b) || (&t.a == b && &t.b == a))
    }

    /// Iterate the transfers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &VirtualTransfer> {
        self.transfers.iter()
    }

    /// Number of declared transfers.
    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    /// Whether no transfers are declared.
    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }
}

/// Builder for declaring virtual transfers.
#[derive(Debug, Default)]
pub struct VirtualTransfersBuilder {
    inner: VirtualTransfers,
}

impl VirtualTransfersBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transfer. Entries with an empty station name are skipped.
    pub fn add(mut self, a: &str, b: &str, note: &str) -> Self {
        if let (Ok(a), Ok(b)) = (Station::parse(a), Station::parse(b)) {
            self.inner.add(a, b, note);
        }
        self
    }

    /// Build the collection.
    pub fn build(self) -> VirtualTransfers {
        self.inner
    }
}

/// Curated virtual transfers for the Delhi metro network.
///
/// These are interchange pairs that carry different names on different
/// lines, so the stop sequences alone never connect them.
pub fn delhi_connections() -> VirtualTransfers {
    VirtualTransfersBuilder::new()
        .add(
            "Noida Sector 52",
            "Noida Sector 51",
            "footbridge between the Blue and Aqua line stations",
        )
        .add(
            "Dhaula Kuan",
            "Durgabai Deshmukh South Campus",
            "skywalk between the Airport Express and Pink line stations",
        )
        .add(
            "Sikandarpur",
            "Sikandarpur Rapid",
            "paid-area link between the Yellow line and Rapid Metro",
        )
        .build()
}
