//! Protocol parsing and data structures module
//!
//! This module provides functionality for reading plenary session protocols
//! and segmenting their transcript into per-speaker speech records.

pub(crate) mod cleanup;
pub(crate) mod date;
pub(crate) mod io;
pub mod loader;
pub mod models;
pub(crate) mod parsing;

pub use loader::{BatchOutcome, load_protocol, load_protocols, parse_protocol};
pub use models::*;
