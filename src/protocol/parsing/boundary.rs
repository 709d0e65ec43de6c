//! Speech boundary detection
//!
//! Scans the protocol forward, line by line, until the end of the session.
//! Every speech-start line attributed to a recognized party opens a
//! candidate speech whose body is read from the following lines.

use tracing::{debug, info};

use super::super::cleanup::clean_speaker_name;
use super::super::models::{Party, SpeechRecord};
use super::body::extract_speech_body;
use super::patterns::{is_end_of_session, match_speech_start};
use crate::config::ExtractorConfig;

/// Segment protocol lines into speech records in transcript order
pub(crate) fn segment_speeches<S: AsRef<str>>(
    lines: &[S],
    config: &ExtractorConfig,
) -> Vec<SpeechRecord> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .enumerate()
        .take_while(|(_, line)| !is_end_of_session(line))
        .filter_map(|(index, line)| {
            let speaker = detect_speaker(line)?;
            let text = extract_speech_body(lines, index + 1, config);

            // Too short to be a real speech
            if text.chars().count() < config.min_speech_chars {
                debug!(
                    line = index + 1,
                    name = %speaker.0,
                    chars = text.chars().count(),
                    "Discarded short speech candidate"
                );
                return None;
            }

            Some(SpeechRecord {
                name: speaker.0,
                party: speaker.1,
                text,
            })
        })
        .fold(Vec::new(), append_or_merge)
}

/// Speaker attribution of a speech-start line, if the party is recognized
fn detect_speaker(line: &str) -> Option<(String, Party)> {
    let start = match_speech_start(line)?;

    match Party::from_label(start.party) {
        Some(party) => Some((clean_speaker_name(start.name), party)),
        None => {
            info!(party = start.party, "Discarded party");
            None
        }
    }
}

fn append_or_merge(mut speeches: Vec<SpeechRecord>, record: SpeechRecord) -> Vec<SpeechRecord> {
    match speeches.pop() {
        Some(previous) if previous.same_speaker(&record) => {
            speeches.push(previous.merged_with(record));
        }
        Some(previous) => {
            speeches.push(previous);
            speeches.push(record);
        }
        None => speeches.push(record),
    }
    speeches
}
