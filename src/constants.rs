//! Application constants for the variant loader
//!
//! This module contains the default configuration values and record layout
//! constants used throughout the loader.

// =============================================================================
// Input Defaults
// =============================================================================

/// Source name that appears as the nesting key of every record
pub const DEFAULT_SOURCE_NAME: &str = "my_data_source";

/// Name of the file to read inside the data folder
pub const DEFAULT_FILENAME: &str = "sample_data.tsv";

/// Delimiter that separates each field
pub const DEFAULT_DELIMITER: char = '\t';

/// Delimiter used by comma-separated score files
pub const COMMA_DELIMITER: char = ',';

// =============================================================================
// Record Layout
// =============================================================================

/// Number of fields every data line must split into
pub const FIELD_COUNT: usize = 4;

/// Names of the leading fields in line order; the fourth takes the configured score label
pub const FIELD_NAMES: [&str; FIELD_COUNT - 1] = ["chrom", "start", "end"];

/// Prefix that marks a comment line
pub const COMMENT_PREFIX: char = '#';

/// Substring removed from chromosome tokens
pub const CHROMOSOME_PREFIX: &str = "chr";

/// Key of the record identifier in serialized output
pub const ID_KEY: &str = "_id";

/// Coordinate system marker used in identifiers (genomic)
pub const GENOMIC_COORDINATE_MARKER: &str = "g.";

// =============================================================================
// Logging
// =============================================================================

/// Default log level used when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Template for the progress bar shown while reading lines
pub const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} lines {msg}";
