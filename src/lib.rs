//! plenum: speech extraction from parliamentary session protocols
//!
//! This library reads plenary protocols of the German Bundestag, segments
//! their transcript into per-speaker speeches and flattens many protocols
//! into one dataset of `(date, name, party, text)` rows.

pub mod config;
pub mod dataset;
pub mod error;
pub mod protocol;

// Re-export commonly used types
pub use config::ExtractorConfig;
pub use dataset::{Dataset, DatasetRow, flatten, write_csv};
pub use error::{ExtractError, Result};
pub use protocol::{
    BatchOutcome, ParsedDocument, Party, Protocol, SpeechRecord, load_protocol, load_protocols,
    parse_protocol,
};
