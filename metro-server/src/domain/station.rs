//! Station name type.

use std::borrow::Borrow;
use std::fmt;

/// Error returned when constructing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A station, identified solely by its display name.
///
/// There is no separate ID type: two stations are the same station exactly
/// when their names are byte-for-byte equal. Matching is case- and
/// whitespace-sensitive; no trimming or normalization is ever applied.
/// Stations that are physically linked but named differently across lines
/// are bridged explicitly via virtual transfers, not by fuzzy matching.
///
/// # Examples
///
/// ```
/// use metro_server::domain::Station;
///
/// let station = Station::parse("Rajiv Chowk").unwrap();
/// assert_eq!(station.as_str(), "Rajiv Chowk");
///
/// // The empty string is not a station name
/// assert!(Station::parse("").is_err());
///
/// // Surrounding whitespace is preserved, not stripped
/// let padded = Station::parse(" Rajiv Chowk").unwrap();
/// assert_ne!(station, padded);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Station(String);

impl Station {
    /// Parse a station name from a string.
    ///
    /// The only rejected input is the empty string; anything else is kept
    /// verbatim.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        if s.is_empty() {
            return Err(InvalidStation {
                reason: "must not be empty",
            });
        }

        Ok(Station(s.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original, verbatim
        #[test]
        fn roundtrip(s in ".{1,40}") {
            let station = Station::parse(&s).unwrap();
            prop_assert_eq!(station.as_str(), s.as_str());
        }

        /// Any non-empty string parses
        #[test]
        fn non_empty_always_parses(s in ".{1,40}") {
            prop_assert!(Station::parse(&s).is_ok());
        }

        /// Equality is exact: appending anything changes identity
        #[test]
        fn suffix_changes_identity(s in "[a-zA-Z ]{1,20}", suffix in "[a-zA-Z]{1,5}") {
            let plain = Station::parse(&s).unwrap();
            let extended = Station::parse(&format!("{s}{suffix}")).unwrap();
            prop_assert_ne!(plain, extended);
        }
    }
}
