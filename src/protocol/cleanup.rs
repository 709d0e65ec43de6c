//! Post-processing and cleanup utilities
//!
//! This module provides helper functions for cleaning speaker names and
//! accumulated speech text after the line scan.

use super::parsing::patterns::strip_annotations;

/// Strip titles or constituencies in parentheses from a speaker name
pub(crate) fn clean_speaker_name(raw: &str) -> String {
    strip_annotations(raw).trim().to_string()
}

pub(crate) fn is_sentence_end(token: &str) -> bool {
    token.ends_with('.') || token.ends_with('?') || token.ends_with('!')
}

/// Drop stage directions and everything after the last complete sentence.
///
/// Returns `None` when no sentence-terminated token survives.
pub(crate) fn clean_speech_text(raw: &str) -> Option<String> {
    let without_annotations = strip_annotations(raw);
    let mut tokens: Vec<&str> = without_annotations.split_whitespace().collect();

    while let Some(last) = tokens.last() {
        if is_sentence_end(last) {
            break;
        }
        tokens.pop();
    }

    if tokens.is_empty() {
        None
    } else {
        Some(tokens.join(" "))
    }
}
