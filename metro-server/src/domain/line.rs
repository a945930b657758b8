//! Transit line type.

use super::Station;

/// A named transit line: an ordered sequence of stations in physical stop
/// order.
///
/// Multiple lines may share stations (interchange points) or even whole
/// track segments. A line with fewer than two stations is legal but
/// contributes no adjacencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    name: String,
    stations: Vec<Station>,
}

impl Line {
    /// Create a new line.
    pub fn new(name: impl Into<String>, stations: Vec<Station>) -> Self {
        Self {
            name: name.into(),
            stations,
        }
    }

    /// The line's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line's stops, in physical order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Consecutive stop pairs along the line, in stop order.
    pub fn consecutive_pairs(&self) -> impl Iterator<Item = (&Station, &Station)> {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Whether `a` and `b` are adjacent stops on this line, in either
    /// direction.
    pub fn serves_adjacent(&self, a: &Station, b: &Station) -> bool {
        self.stations
            .windows(2)
            .any(|w| (&w[0] == a && &w[1] == b) || (&w[0] == b && &w[1] == a))
    }
}
