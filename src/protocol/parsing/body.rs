//! Speech body extraction
//!
//! Collects the lines following a speech boundary until the next speaker,
//! the end of the session, or an unattributed interjection, then cleans the
//! accumulated text.

use tracing::warn;

use super::super::cleanup::clean_speech_text;
use super::patterns::{is_end_of_session, is_speech_start};
use crate::config::ExtractorConfig;

const PREVIEW_CHARS: usize = 60;

/// Extract the cleaned speech text starting at `lines[start]`.
///
/// Returns an empty string when the body has no complete sentence.
pub(crate) fn extract_speech_body<S: AsRef<str>>(
    lines: &[S],
    start: usize,
    config: &ExtractorConfig,
) -> String {
    let mut raw = String::new();

    for line in lines.iter().skip(start).map(|line| line.as_ref()) {
        if is_speech_start(line) || is_end_of_session(line) {
            break;
        }

        if line.starts_with(&config.page_header_marker) {
            continue;
        }

        // Someone talking without a formal speech-start line
        if line.ends_with(':') {
            break;
        }

        append_line(&mut raw, line);
    }

    match clean_speech_text(&raw) {
        Some(text) => text,
        None => {
            warn!(
                chars = raw.chars().count(),
                preview = %speech_preview(&raw),
                "Skipping incomplete or malformed speech"
            );
            String::new()
        }
    }
}

/// Leading characters of a speech, for log lines
fn speech_preview(raw: &str) -> String {
    let mut preview: String = raw.trim().chars().take(PREVIEW_CHARS).collect();
    if raw.trim().chars().count() > PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

fn append_line(raw: &mut String, line: &str) {
    let line = line.trim().replace(" .", ".").replace('–', "-");

    match line.strip_suffix('-') {
        // Hyphenated word break, the next line continues the word
        Some(head) => raw.push_str(head),
        None => {
            raw.push_str(&line);
            raw.push(' ');
        }
    }
}
