//! Individual line processing
//!
//! Turns one raw line into a [`VariantRecord`] or the reason it was skipped.
//! Nothing here logs or touches the filesystem.

use super::field_parsers::{normalize_chromosome, parse_coordinate, parse_score, split_fields};
use super::stats::SkipReason;
use crate::app::models::{Variant, VariantRecord};
use crate::config::ParserConfig;
use crate::constants::{COMMENT_PREFIX, FIELD_NAMES};

/// Parse a single line (without its line terminator) into a record
pub fn parse_line(line: &str, config: &ParserConfig) -> Result<VariantRecord, SkipReason> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(SkipReason::Blank);
    }
    if line.starts_with(COMMENT_PREFIX) {
        return Err(SkipReason::Comment);
    }

    let [chrom, start, end, score] = split_fields(trimmed, config.delimiter)?;

    let chrom = normalize_chromosome(chrom)?;
    let start = parse_coordinate(FIELD_NAMES[1], start)?;
    let end = parse_coordinate(FIELD_NAMES[2], end)?;
    let score = parse_score(config.score_field.as_str(), score)?;

    Ok(VariantRecord::new(
        config.source_name.as_str(),
        config.score_field,
        Variant::new(chrom, start, end, score),
    ))
}
