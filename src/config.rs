use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};

/// Tunables for speech extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Speeches with fewer characters than this after cleanup are dropped
    pub min_speech_chars: usize,

    /// Lines starting with this marker are running page headers
    pub page_header_marker: String,

    /// Name of the XML element carrying the session date
    pub date_element: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            min_speech_chars: 200,
            page_header_marker: "Deutscher Bundestag ".to_string(),
            date_element: "DATUM".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Load config from the user config directory, or defaults if absent
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::from_file(&config_path);
            }
        }

        Ok(ExtractorConfig::default())
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExtractError::Config(format!("cannot read {}: {e}", path.display()))
        })?;

        toml::from_str(&content)
            .map_err(|e| ExtractError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Get the path to the config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("plenum").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.min_speech_chars, 200);
        assert_eq!(config.page_header_marker, "Deutscher Bundestag ");
        assert_eq!(config.date_element, "DATUM");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ExtractorConfig = toml::from_str("min_speech_chars = 50").unwrap();
        assert_eq!(config.min_speech_chars, 50);
        assert_eq!(config.date_element, "DATUM");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "date_element = \"SITZUNGSDATUM\"\n").unwrap();

        let config = ExtractorConfig::from_file(&path).unwrap();
        assert_eq!(config.date_element, "SITZUNGSDATUM");
        assert_eq!(config.min_speech_chars, 200);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "min_speech_chars = \"many\"").unwrap();

        assert!(matches!(
            ExtractorConfig::from_file(&path),
            Err(ExtractError::Config(_))
        ));
    }
}
