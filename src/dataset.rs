//! Flattening of parsed protocols into one speech dataset
//!
//! Every speech becomes a row `(date, name, party, text)`. Dates are parsed
//! from the protocol's `DD.MM.YYYY` form and parties use their short dataset
//! code.

use chrono::NaiveDate;
use std::io::{self, Write};
use tracing::warn;

use crate::error::{ExtractError, Result};
use crate::protocol::ParsedDocument;

pub const COLUMNS: [&str; 4] = ["date", "name", "party", "text"];

const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRow {
    pub date: NaiveDate,
    pub name: String,
    pub party: String,
    pub text: String,
}

/// Parse a session date as printed in the protocol header
pub fn parse_session_date(file: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| ExtractError::InvalidDate {
        file: file.to_string(),
        value: value.to_string(),
    })
}

/// Rows of every usable document plus the documents that were left out
#[derive(Debug, Default)]
pub struct Dataset {
    pub rows: Vec<DatasetRow>,
    pub failures: Vec<ExtractError>,
}

/// One row per speech, in document order then speech order.
///
/// A document whose date cannot be parsed is skipped and reported in
/// `failures`; its siblings are still flattened.
pub fn flatten(documents: &[ParsedDocument]) -> Dataset {
    let mut dataset = Dataset::default();

    for document in documents {
        let date = match parse_session_date(&document.file, &document.date) {
            Ok(date) => date,
            Err(e) => {
                warn!(file = %document.file, error = %e, "Skipping protocol in dataset");
                dataset.failures.push(e);
                continue;
            }
        };

        dataset.rows.extend(document.speeches.iter().map(|speech| DatasetRow {
            date,
            name: speech.name.clone(),
            party: speech.party.dataset_code().to_string(),
            text: speech.text.clone(),
        }));
    }

    dataset
}

/// Write rows as CSV with a header line
pub fn write_csv<W: Write>(rows: &[DatasetRow], mut writer: W) -> io::Result<()> {
    writeln!(writer, "{}", COLUMNS.join(","))?;

    for row in rows {
        let date = row.date.format("%Y-%m-%d").to_string();
        let fields = [
            date.as_str(),
            row.name.as_str(),
            row.party.as_str(),
            row.text.as_str(),
        ];
        let line: Vec<String> = fields.iter().map(|field| escape_csv_field(field)).collect();
        writeln!(writer, "{}", line.join(","))?;
    }

    writer.flush()
}

fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Party, SpeechRecord};

    fn document(date: &str, speeches: Vec<(&str, Party, &str)>) -> ParsedDocument {
        ParsedDocument {
            date: date.to_string(),
            file: "19130.xml".to_string(),
            speeches: speeches
                .into_iter()
                .map(|(name, party, text)| SpeechRecord {
                    name: name.to_string(),
                    party,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_flatten_rows_in_order() {
        let documents = vec![
            document(
                "12.12.2019",
                vec![
                    ("Hans Meier", Party::Spd, "Erste Rede."),
                    ("Anna Schulz", Party::Gruene, "Zweite Rede."),
                ],
            ),
            document("13.12.2019", vec![("Eva Klein", Party::DieLinke, "Dritte Rede.")]),
        ];

        let dataset = flatten(&documents);
        assert!(dataset.failures.is_empty());
        let rows = dataset.rows;
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2019, 12, 12).unwrap());
        assert_eq!(rows[1].party, "GRUENE");
        assert_eq!(rows[2].name, "Eva Klein");
        assert_eq!(rows[2].party, "DIE LINKE");
        assert_eq!(rows[2].date, NaiveDate::from_ymd_opt(2019, 12, 13).unwrap());
    }

    #[test]
    fn test_invalid_date() {
        assert!(matches!(
            parse_session_date("19130.xml", "2019-12-12"),
            Err(ExtractError::InvalidDate { ref value, .. }) if value == "2019-12-12"
        ));
    }

    #[test]
    fn test_bad_date_skips_only_that_document() {
        let mut bad = document(
            "12. Dezember 2019",
            vec![("Karl Berg", Party::Fdp, "Verlorene Rede.")],
        );
        bad.file = "19131.xml".to_string();
        let documents = vec![
            bad,
            document("13.12.2019", vec![("Eva Klein", Party::DieLinke, "Erhaltene Rede.")]),
        ];

        let dataset = flatten(&documents);

        assert_eq!(dataset.rows.len(), 1);
        assert_eq!(dataset.rows[0].name, "Eva Klein");
        assert_eq!(dataset.failures.len(), 1);
        assert!(matches!(
            dataset.failures[0],
            ExtractError::InvalidDate { ref file, .. } if file == "19131.xml"
        ));
    }

    #[test]
    fn test_csv_output() {
        let rows = vec![DatasetRow {
            date: NaiveDate::from_ymd_opt(2019, 12, 12).unwrap(),
            name: "Hans Meier".to_string(),
            party: "SPD".to_string(),
            text: "Ja, wir sagen \"Nein\".".to_string(),
        }];

        let mut out = Vec::new();
        write_csv(&rows, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "date,name,party,text\n2019-12-12,Hans Meier,SPD,\"Ja, wir sagen \"\"Nein\"\".\"\n"
        );
    }

    #[test]
    fn test_escape_plain_field_untouched() {
        assert_eq!(escape_csv_field("CDU/CSU"), "CDU/CSU");
    }
}
