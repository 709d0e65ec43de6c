//! Line patterns of the plenary transcript
//!
//! Two independent matchers: the line that opens a speech
//! (`Name (PARTY):`) and the line that closes the session
//! (`(Schluss: 13.37 Uhr)`).

use once_cell::sync::Lazy;
use regex::Regex;

// Name is the greedy non-digit run before the last " (" that still leaves a
// non-empty party followed by "):".
static SPEECH_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\D+) \((.+)\):").unwrap());

static END_OF_SESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(Schluss: .*\)$").unwrap());

static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(.*?\)").unwrap());

/// Raw speaker attribution captured from a speech-start line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SpeechStart<'a> {
    pub(crate) name: &'a str,
    pub(crate) party: &'a str,
}

pub(crate) fn match_speech_start(line: &str) -> Option<SpeechStart<'_>> {
    let captures = SPEECH_START.captures(line)?;
    let name = captures.get(1)?.as_str().trim();
    let party = captures.get(2)?.as_str().trim();
    Some(SpeechStart { name, party })
}

pub(crate) fn is_speech_start(line: &str) -> bool {
    SPEECH_START.is_match(line)
}

pub(crate) fn is_end_of_session(line: &str) -> bool {
    END_OF_SESSION.is_match(line)
}

/// Remove every parenthesized span, shortest match first
pub(crate) fn strip_annotations(text: &str) -> String {
    ANNOTATION.replace_all(text, "").into_owned()
}
