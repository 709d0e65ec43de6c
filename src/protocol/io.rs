//! File validation for protocol inputs

use std::path::Path;

use crate::error::{ExtractError, Result};

/// Validates that the path names an existing .xml protocol file
pub(crate) fn validate_protocol_file(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if !extension.eq_ignore_ascii_case("xml") {
        return Err(ExtractError::InvalidFile(format!(
            "{}: expected an .xml session protocol, got .{extension}",
            file_path.display()
        )));
    }

    if !file_path.is_file() {
        return Err(ExtractError::InvalidFile(format!(
            "{}: no such file",
            file_path.display()
        )));
    }

    Ok(())
}
