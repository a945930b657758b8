//! Line registry: the set of named lines and their stop sequences.
//!
//! Loaded once at startup from a local file or a remote endpoint, then
//! treated as read-only for the life of the process.

mod client;
mod error;
mod lines;

pub use client::{LineClient, LineClientConfig};
pub use error::RegistryError;
pub use lines::LineRegistry;
