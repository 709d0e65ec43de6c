//! Transcript parsing utilities
//!
//! Line patterns, speech boundary detection and body extraction.

pub(crate) mod body;
pub(crate) mod boundary;
pub(crate) mod patterns;
