//! Field parsing utilities for delimited variant lines
//!
//! This module provides helper functions for splitting a line into its
//! fields and converting each field to its type.

use super::stats::SkipReason;
use crate::constants::{CHROMOSOME_PREFIX, FIELD_COUNT, FIELD_NAMES};

/// Split a trimmed line into exactly [`FIELD_COUNT`] fields
pub fn split_fields(line: &str, delimiter: char) -> Result<[&str; FIELD_COUNT], SkipReason> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    fields
        .try_into()
        .map_err(|fields: Vec<&str>| SkipReason::field_count(&fields))
}

/// Remove every `chr` substring from a chromosome token
pub fn normalize_chromosome(token: &str) -> Result<String, SkipReason> {
    let chrom = token.trim().replace(CHROMOSOME_PREFIX, "");
    if chrom.is_empty() {
        return Err(SkipReason::invalid_value(
            FIELD_NAMES[0],
            token,
            "chromosome is empty after normalization",
        ));
    }
    Ok(chrom)
}

/// Parse an integer coordinate field
pub fn parse_coordinate(field_name: &'static str, token: &str) -> Result<i64, SkipReason> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|e| SkipReason::invalid_value(field_name, token, e.to_string()))
}

/// Parse a finite floating point score field
pub fn parse_score(field_name: &'static str, token: &str) -> Result<f64, SkipReason> {
    let score = token
        .trim()
        .parse::<f64>()
        .map_err(|e| SkipReason::invalid_value(field_name, token, e.to_string()))?;

    // NaN and infinities have no JSON number representation
    if !score.is_finite() {
        return Err(SkipReason::invalid_value(
            field_name,
            token,
            "score must be finite",
        ));
    }
    Ok(score)
}
