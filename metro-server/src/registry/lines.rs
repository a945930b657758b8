//! The line registry and its JSON loading.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::{Line, Station};

use super::error::RegistryError;

/// The set of named lines, in declaration order.
///
/// Declaration order matters: graph edges are inserted in this order, and
/// line attribution picks the first matching line in this order, so a
/// fixed registry gives fully deterministic results.
#[derive(Debug, Clone)]
pub struct LineRegistry {
    lines: Vec<Line>,
}

impl LineRegistry {
    /// Create a registry from already-validated lines.
    pub fn from_lines(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Parse a registry from a JSON document.
    ///
    /// The expected shape is a top-level object mapping line name to an
    /// array of station-name strings:
    ///
    /// ```json
    /// { "Red": ["Rithala", "Rohini West"], "Yellow": ["..."] }
    /// ```
    ///
    /// Key order in the document becomes registry order.
    pub fn from_json_str(data: &str) -> Result<Self, RegistryError> {
        let value: serde_json::Value =
            serde_json::from_str(data).map_err(|e| RegistryError::Malformed {
                message: e.to_string(),
            })?;

        let map = value.as_object().ok_or_else(|| RegistryError::Malformed {
            message: "top level must be an object mapping line name to stations".to_string(),
        })?;

        let mut lines = Vec::with_capacity(map.len());
        for (name, stops) in map {
            let stops = stops.as_array().ok_or_else(|| RegistryError::Malformed {
                message: format!("line {name}: expected an array of station names"),
            })?;

            let stations = stops
                .iter()
                .map(|stop| {
                    let stop = stop.as_str().ok_or_else(|| RegistryError::Malformed {
                        message: format!("line {name}: station entries must be strings"),
                    })?;
                    Station::parse(stop).map_err(|e| RegistryError::Malformed {
                        message: format!("line {name}: {e}"),
                    })
                })
                .collect::<Result<Vec<Station>, RegistryError>>()?;

            lines.push(Line::new(name.clone(), stations));
        }

        if lines.is_empty() {
            return Err(RegistryError::Empty);
        }

        Ok(Self { lines })
    }

    /// Load a registry from a local JSON file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// The lines, in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Look up a line by name.
    pub fn get(&self, name: &str) -> Option<&Line> {
        self.lines.iter().find(|line| line.name() == name)
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the registry holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct stations across all lines.
    pub fn station_count(&self) -> usize {
        let mut seen: HashSet<&str> = HashSet::new();
        for line in &self.lines {
            for station in line.stations() {
                seen.insert(station.as_str());
            }
        }
        seen.len()
    }
}
