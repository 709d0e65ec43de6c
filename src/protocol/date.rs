//! Session date extraction from the protocol markup

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{ExtractError, Result};

/// Return the text of the first `element` anywhere in the document, unmodified
pub(crate) fn extract_session_date(file: &str, source: &str, element: &str) -> Result<String> {
    let mut reader = Reader::from_str(source);
    let xml_error = |e: quick_xml::Error| ExtractError::Xml {
        file: file.to_string(),
        message: e.to_string(),
    };
    let missing = || ExtractError::MissingDate {
        file: file.to_string(),
    };

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(ref e) if e.local_name().as_ref() == element.as_bytes() => break,
            // <DATUM/> carries no text
            Event::Empty(ref e) if e.local_name().as_ref() == element.as_bytes() => {
                return Err(missing());
            }
            Event::Eof => return Err(missing()),
            _ => {}
        }
    }

    match reader.read_event().map_err(xml_error)? {
        Event::Text(text) => {
            let text = text.unescape().map_err(xml_error)?;
            if text.is_empty() {
                Err(missing())
            } else {
                Ok(text.into_owned())
            }
        }
        Event::CData(data) => Ok(String::from_utf8_lossy(&data.into_inner()).into_owned()),
        _ => Err(missing()),
    }
}
