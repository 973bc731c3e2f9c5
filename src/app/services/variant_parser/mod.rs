//! Delimited variant file parser
//!
//! This module reads a flat, delimited genomic interval file and normalizes
//! each data line into a [`VariantRecord`](crate::app::models::VariantRecord).
//! Records are produced lazily, one per pull from the iterator.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - File location, lazy iteration and progress/summary logging
//! - [`record_parser`] - Conversion of one line into a record or a skip reason
//! - [`field_parsers`] - Field splitting and type conversion helpers
//! - [`line_counter`] - Line counting for progress percentages
//! - [`stats`] - Parse statistics and skipped line bookkeeping
//!
//! ## Usage
//!
//! ```rust
//! use variant_loader::{ParserConfig, VariantParser};
//!
//! # fn main() -> variant_loader::Result<()> {
//! let parser = VariantParser::new(ParserConfig::comma_score())?;
//! let mut records = parser.parse_str("# header\nchr1,100,200,0.5\n");
//!
//! let record = records.next().unwrap()?;
//! assert_eq!(record.id, "chr1:g.100_200");
//!
//! let stats = records.finish()?;
//! assert_eq!(stats.skipped_count(), 1);
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod line_counter;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_counter::count_lines;
pub use parser::{VariantParser, VariantRecords};
pub use record_parser::parse_line;
pub use stats::{ParseStats, SkipReason, SkippedLine};
