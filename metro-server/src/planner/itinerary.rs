//! Route annotation: per-segment line attribution and transfer stations.

use crate::domain::Station;
use crate::registry::LineRegistry;

/// The first line in registry order on which `a` and `b` are adjacent
/// stops, in either direction.
///
/// First-match-wins is the tie-break for shared track segments: a simple
/// deterministic rule, not an attempt at "best" line selection.
pub fn line_connecting<'a>(
    registry: &'a LineRegistry,
    a: &Station,
    b: &Station,
) -> Option<&'a str> {
    registry
        .lines()
        .iter()
        .find(|line| line.serves_adjacent(a, b))
        .map(|line| line.name())
}

/// Attribute a line to every consecutive pair of the route.
///
/// The result is parallel to the route's segments: one entry per pair,
/// `None` when no line explains the segment (it crosses a virtual
/// transfer). An empty or single-station route yields an empty vec.
pub fn annotate_lines(route: &[Station], registry: &LineRegistry) -> Vec<Option<String>> {
    route
        .windows(2)
        .map(|pair| line_connecting(registry, &pair[0], &pair[1]).map(str::to_string))
        .collect()
}

/// Interior stations where the serving line changes.
///
/// Position i (counting segments) is a transfer when `segment_lines[i]`
/// differs from `segment_lines[i-1]` — including `None` against a name in
/// either direction. Two consecutive `None` segments are equal and so are
/// not a transfer. The first and last stations of the route never appear.
pub fn find_transfers(route: &[Station], segment_lines: &[Option<String>]) -> Vec<Station> {
    route
        .iter()
        .skip(1)
        .zip(segment_lines.windows(2))
        .filter(|(_, adjacent)| adjacent[0] != adjacent[1])
        .map(|(station, _)| station.clone())
        .collect()
}
