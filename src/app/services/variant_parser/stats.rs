//! Parsing statistics and skip bookkeeping
//!
//! This module provides types for tracking how far a parse has progressed,
//! how many records were emitted, and which lines were skipped and why.

use crate::constants::FIELD_COUNT;
use serde::Serialize;

/// Why a line produced no record
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
pub enum SkipReason {
    /// Line starts with `#`
    #[error("comment line")]
    Comment,

    /// Line is empty after trimming whitespace
    #[error("blank line")]
    Blank,

    /// Line did not split into the expected number of fields
    #[error("expected {expected} fields, got {found}: {fields:?}")]
    FieldCount {
        expected: usize,
        found: usize,
        fields: Vec<String>,
    },

    /// A field could not be converted to its type
    #[error("invalid {field} value '{value}': {message}")]
    InvalidValue {
        field: &'static str,
        value: String,
        message: String,
    },
}

impl SkipReason {
    /// Build a field count failure from the actual split result
    pub fn field_count(fields: &[&str]) -> Self {
        Self::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a conversion failure for one field
    pub fn invalid_value(
        field: &'static str,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field,
            value: value.into(),
            message: message.into(),
        }
    }

    /// Comment and blank lines are expected; everything else is malformed data
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::FieldCount { .. } | Self::InvalidValue { .. })
    }
}

/// A line that was left out of the output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number in the input file
    pub line_number: usize,

    /// Line content with surrounding whitespace removed
    pub content: String,

    pub reason: SkipReason,
}

/// Running statistics of a single parse pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseStats {
    /// Line count of the input, measured before reading
    pub total_lines: usize,

    /// Lines consumed so far
    pub lines_read: usize,

    /// Records yielded so far
    pub records_emitted: usize,

    /// Skipped lines in file order
    pub skipped: Vec<SkippedLine>,
}

impl ParseStats {
    /// Create empty statistics for an input of `total_lines` lines
    pub fn new(total_lines: usize) -> Self {
        Self {
            total_lines,
            ..Default::default()
        }
    }

    /// Remember a skipped line
    pub fn record_skip(
        &mut self,
        line_number: usize,
        content: impl Into<String>,
        reason: SkipReason,
    ) {
        self.skipped.push(SkippedLine {
            line_number,
            content: content.into(),
            reason,
        });
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Number of skipped lines that were malformed data rather than comments or blanks
    pub fn malformed_count(&self) -> usize {
        self.skipped
            .iter()
            .filter(|skipped| skipped.reason.is_malformed())
            .count()
    }

    /// Share of lines read that became records, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.lines_read == 0 {
            0.0
        } else {
            (self.records_emitted as f64 / self.lines_read as f64) * 100.0
        }
    }

    /// Share of the input consumed so far, as a percentage
    pub fn progress_percent(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.lines_read as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Every line read is accounted for as either a record or a skip
    pub fn is_balanced(&self) -> bool {
        self.records_emitted + self.skipped.len() == self.lines_read
    }
}
