//! Protocol loading and orchestration
//!
//! This module contains the entry points that turn a session protocol into a
//! [`ParsedDocument`]: validation, reading, date extraction and the speech
//! scan, plus a batch driver that isolates per-file failures.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::date::extract_session_date;
use super::io::validate_protocol_file;
use super::models::*;
use super::parsing::boundary::segment_speeches;
use crate::config::ExtractorConfig;
use crate::error::{ExtractError, Result};

impl Protocol {
    /// Split the source into lines and extract the session date
    pub fn from_source(
        file: impl Into<String>,
        source: &str,
        config: &ExtractorConfig,
    ) -> Result<Protocol> {
        let file = file.into();
        let date = extract_session_date(&file, source, &config.date_element)?;
        let lines = source.lines().map(str::to_string).collect();

        Ok(Protocol { file, date, lines })
    }

    /// Run the speech scan over the protocol lines
    pub fn parse(&self, config: &ExtractorConfig) -> ParsedDocument {
        let speeches = segment_speeches(&self.lines, config);
        debug!(
            file = %self.file,
            date = %self.date,
            speeches = speeches.len(),
            "Parsed protocol"
        );

        ParsedDocument {
            date: self.date.clone(),
            file: self.file.clone(),
            speeches,
        }
    }
}

/// Parse an in-memory protocol source
pub fn parse_protocol(
    file: impl Into<String>,
    source: &str,
    config: &ExtractorConfig,
) -> Result<ParsedDocument> {
    Ok(Protocol::from_source(file, source, config)?.parse(config))
}

/// Read and parse a protocol file
pub async fn load_protocol(file_path: &Path, config: &ExtractorConfig) -> Result<ParsedDocument> {
    validate_protocol_file(file_path)?;

    let source = tokio::fs::read_to_string(file_path).await?;
    parse_protocol(file_path.to_string_lossy(), &source, config)
}

/// Result of loading several protocols
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub documents: Vec<ParsedDocument>,
    pub failures: Vec<(PathBuf, ExtractError)>,
}

/// Load every protocol in order; one failing file never stops the others
pub async fn load_protocols<P: AsRef<Path>>(
    paths: &[P],
    config: &ExtractorConfig,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for path in paths.iter().map(|path| path.as_ref()) {
        info!(file = %path.display(), "Processing protocol");
        match load_protocol(path, config).await {
            Ok(document) => outcome.documents.push(document),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping protocol");
                outcome.failures.push((path.to_path_buf(), e));
            }
        }
    }

    outcome
}
