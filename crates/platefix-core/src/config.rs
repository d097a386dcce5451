//! Trigger configuration.
//!
//! Defaults watch column A below a single header row. A TOML file can move the
//! watched column or protect more header rows:
//!
//! ```toml
//! target_column = 1
//! header_rows = 1
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{PlatefixError, Result};
use platefix_engine::edit::{HEADER_ROWS, TARGET_COLUMN};

/// Config files larger than this are refused.
const MAX_CONFIG_FILE_BYTES: u64 = 64 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TriggerConfig {
    /// 1-based column whose edits are normalized.
    pub target_column: u32,
    /// Number of rows at the top of the sheet left untouched.
    pub header_rows: u32,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        TriggerConfig {
            target_column: TARGET_COLUMN,
            header_rows: HEADER_ROWS,
        }
    }
}

impl TriggerConfig {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let meta = std::fs::metadata(path)?;
        if meta.len() > MAX_CONFIG_FILE_BYTES {
            return Err(PlatefixError::Config(format!(
                "{} is too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content).map_err(|source| PlatefixError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_column == 0 {
            return Err(PlatefixError::Config(
                "target_column is 1-based and must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_watches_column_a_below_header() {
        let config = TriggerConfig::default();
        assert_eq!(config.target_column, 1);
        assert_eq!(config.header_rows, 1);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = TriggerConfig::from_toml_str("header_rows = 3").unwrap();
        assert_eq!(config.target_column, 1);
        assert_eq!(config.header_rows, 3);

        let config = TriggerConfig::from_toml_str("").unwrap();
        assert_eq!(config, TriggerConfig::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(TriggerConfig::from_toml_str("target_colum = 2").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target_column = 2\nheader_rows = 0").unwrap();

        let config = TriggerConfig::load(file.path()).unwrap();
        assert_eq!(config.target_column, 2);
        assert_eq!(config.header_rows, 0);
    }

    #[test]
    fn test_load_rejects_zero_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target_column = 0").unwrap();

        let err = TriggerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PlatefixError::Config(_)));
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "target_column = \"A\"").unwrap();

        let err = TriggerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, PlatefixError::ConfigParse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TriggerConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, PlatefixError::Io(_)));
    }
}
