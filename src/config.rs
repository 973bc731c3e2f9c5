//! Configuration management and validation.
//!
//! Provides the parser configuration (source label, input file name, field
//! delimiter and score field label) that is passed to the parser at
//! construction time, plus TOML loading for configuration files.

use crate::constants::{
    COMMA_DELIMITER, COMMENT_PREFIX, DEFAULT_DELIMITER, DEFAULT_FILENAME, DEFAULT_SOURCE_NAME,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Label of the fourth field in emitted records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreField {
    /// Percentile rank annotation
    Percentile,
    /// Raw score annotation
    Score,
}

impl ScoreField {
    /// Key used for this field in serialized records
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreField::Percentile => "percentile",
            ScoreField::Score => "score",
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a variant parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Source name used as the nesting key of each record
    pub source_name: String,

    /// Name of the data file inside the data folder
    pub filename: String,

    /// Character separating the fields of a line
    pub delimiter: char,

    /// Label of the fourth field
    pub score_field: ScoreField,

    /// Draw a terminal progress bar while reading
    pub show_progress: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::tab_percentile()
    }
}

impl ParserConfig {
    /// Tab-delimited layout with a `percentile` field
    pub fn tab_percentile() -> Self {
        Self {
            source_name: DEFAULT_SOURCE_NAME.to_string(),
            filename: DEFAULT_FILENAME.to_string(),
            delimiter: DEFAULT_DELIMITER,
            score_field: ScoreField::Percentile,
            show_progress: false,
        }
    }

    /// Comma-delimited layout with a `score` field
    pub fn comma_score() -> Self {
        Self {
            delimiter: COMMA_DELIMITER,
            score_field: ScoreField::Score,
            ..Self::tab_percentile()
        }
    }

    /// Set the source name
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = source_name.into();
        self
    }

    /// Set the input file name
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the score field label
    pub fn with_score_field(mut self, score_field: ScoreField) -> Self {
        self.score_field = score_field;
        self
    }

    /// Enable the terminal progress bar
    pub fn with_progress(mut self) -> Self {
        self.show_progress = true;
        self
    }

    /// Parse a configuration from TOML text
    ///
    /// Missing keys fall back to [`ParserConfig::tab_percentile`] values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| Error::configuration(format!("Invalid TOML configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Render this configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| Error::configuration(format!("Failed to serialize configuration: {}", e)))
    }

    /// Check that the configuration can drive a parse
    pub fn validate(&self) -> Result<()> {
        if self.source_name.trim().is_empty() {
            return Err(Error::configuration("source_name must not be empty"));
        }

        if self.filename.trim().is_empty() {
            return Err(Error::configuration("filename must not be empty"));
        }

        if self.filename.contains('/') || self.filename.contains('\\') {
            return Err(Error::configuration(format!(
                "filename must be a bare file name, got '{}'",
                self.filename
            )));
        }

        // Lines are trimmed before splitting, so only tab survives as a whitespace delimiter
        if self.delimiter == COMMENT_PREFIX
            || (self.delimiter.is_whitespace() && self.delimiter != '\t')
        {
            return Err(Error::configuration(format!(
                "unsupported delimiter {:?}",
                self.delimiter
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_tab_percentile() {
        let config = ParserConfig::default();
        assert_eq!(config.source_name, "my_data_source");
        assert_eq!(config.filename, "sample_data.tsv");
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.score_field, ScoreField::Percentile);
        assert!(!config.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_comma_score_preset() {
        let config = ParserConfig::comma_score();
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.score_field, ScoreField::Score);
        assert_eq!(config.filename, "sample_data.tsv");
    }

    #[test]
    fn test_builder_methods() {
        let config = ParserConfig::default()
            .with_source_name("cadd")
            .with_filename("scores.csv")
            .with_delimiter(',')
            .with_score_field(ScoreField::Score)
            .with_progress();

        assert_eq!(config.source_name, "cadd");
        assert_eq!(config.filename, "scores.csv");
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.score_field, ScoreField::Score);
        assert!(config.show_progress);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(ParserConfig::default().with_source_name("").validate().is_err());
        assert!(ParserConfig::default().with_filename("  ").validate().is_err());
        assert!(
            ParserConfig::default()
                .with_filename("nested/file.tsv")
                .validate()
                .is_err()
        );
        assert!(ParserConfig::default().with_delimiter('#').validate().is_err());
        assert!(ParserConfig::default().with_delimiter(' ').validate().is_err());
        assert!(ParserConfig::default().with_delimiter('|').validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ParserConfig::from_toml_str(
            r#"
source_name = "dbnsfp"
delimiter = ","
score_field = "score"
"#,
        )
        .unwrap();

        assert_eq!(config.source_name, "dbnsfp");
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.score_field, ScoreField::Score);
        assert_eq!(config.filename, "sample_data.tsv");
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        let result = ParserConfig::from_toml_str("score_field = \"rank\"");
        assert!(matches!(result, Err(Error::Configuration { .. })));

        let result = ParserConfig::from_toml_str("source_name = \"\"");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_toml_round_trip_preserves_tab() {
        let config = ParserConfig::default().with_source_name("roundtrip");
        let text = config.to_toml_string().unwrap();
        let parsed = ParserConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("loader.toml");
        std::fs::write(&path, "filename = \"scores.tsv\"\n").unwrap();

        let config = ParserConfig::from_file(&path).unwrap();
        assert_eq!(config.filename, "scores.tsv");

        let missing = ParserConfig::from_file(&dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(Error::Io { .. })));
    }

    #[test]
    fn test_score_field_display() {
        assert_eq!(ScoreField::Percentile.to_string(), "percentile");
        assert_eq!(ScoreField::Score.as_str(), "score");
    }
}
