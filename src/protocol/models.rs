//! Core data structures for protocol representation
//!
//! This module defines the public types produced by speech extraction:
//! the raw protocol, the recognized parties, speech records and the
//! parsed document handed to the dataset builder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A session protocol as read from disk
#[derive(Debug, Clone)]
pub struct Protocol {
    pub file: String,
    pub date: String,
    pub lines: Vec<String>,
}

/// Parties recognized as legitimate speech attributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    #[serde(rename = "AFD")]
    Afd,
    #[serde(rename = "SPD")]
    Spd,
    #[serde(rename = "DIE LINKE")]
    DieLinke,
    #[serde(rename = "CDU/CSU")]
    CduCsu,
    #[serde(rename = "BÜNDNIS 90/DIE GRÜNEN")]
    Gruene,
    #[serde(rename = "FDP")]
    Fdp,
}

impl Party {
    pub const ALL: [Party; 6] = [
        Party::Afd,
        Party::Spd,
        Party::DieLinke,
        Party::CduCsu,
        Party::Gruene,
        Party::Fdp,
    ];

    /// Canonical upper-case label as printed in the protocols
    pub fn label(self) -> &'static str {
        match self {
            Party::Afd => "AFD",
            Party::Spd => "SPD",
            Party::DieLinke => "DIE LINKE",
            Party::CduCsu => "CDU/CSU",
            Party::Gruene => "BÜNDNIS 90/DIE GRÜNEN",
            Party::Fdp => "FDP",
        }
    }

    /// Short code used in the flattened dataset
    pub fn dataset_code(self) -> &'static str {
        match self {
            Party::Gruene => "GRUENE",
            other => other.label(),
        }
    }

    /// Case-insensitive lookup of a party label
    pub fn from_label(label: &str) -> Option<Party> {
        let wanted = label.trim().to_lowercase();
        Party::ALL
            .into_iter()
            .find(|party| party.label().to_lowercase() == wanted)
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechRecord {
    pub name: String,
    pub party: Party,
    pub text: String,
}

impl SpeechRecord {
    /// True when both records are attributed to the same speaker
    pub fn same_speaker(&self, other: &SpeechRecord) -> bool {
        self.name == other.name && self.party == other.party
    }

    /// Continue this speech with the text of a later fragment, appended as is
    pub fn merged_with(self, continuation: SpeechRecord) -> SpeechRecord {
        let mut text = self.text;
        text.push_str(&continuation.text);
        SpeechRecord {
            name: self.name,
            party: self.party,
            text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub date: String,
    pub file: String,
    pub speeches: Vec<SpeechRecord>,
}
