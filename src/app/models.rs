//! Core data models for normalized variant records
//!
//! A [`Variant`] holds the typed fields of one data line. A [`VariantRecord`]
//! wraps it with its identifier and the source it came from, and serializes
//! to the keyed document shape consumed downstream:
//!
//! ```json
//! {"_id": "chr7:g.1000_2000", "my_data_source": {"chrom": "7", "start": 1000, "end": 2000, "percentile": 0.95}}
//! ```

use crate::config::ScoreField;
use crate::constants::{CHROMOSOME_PREFIX, GENOMIC_COORDINATE_MARKER, ID_KEY};
use crate::Result;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt;

/// Typed fields of a single genomic interval
///
/// Serialized only through [`VariantRecord`], which names the score key.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    /// Chromosome with every `chr` substring removed
    pub chrom: String,
    pub start: i64,
    pub end: i64,
    /// Score or percentile annotation
    pub score: f64,
}

impl Variant {
    pub fn new(chrom: impl Into<String>, start: i64, end: i64, score: f64) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            score,
        }
    }

    /// Genomic identifier in the form `chr{chrom}:g.{start}_{end}`
    pub fn genomic_id(&self) -> String {
        format!(
            "{}{}:{}{}_{}",
            CHROMOSOME_PREFIX, self.chrom, GENOMIC_COORDINATE_MARKER, self.start, self.end
        )
    }
}

/// A normalized record ready to be committed downstream
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRecord {
    /// Record identifier, serialized under `_id`
    pub id: String,

    /// Source name the variant is nested under
    pub source_name: String,

    /// Label of the score field in serialized output
    pub score_field: ScoreField,

    pub variant: Variant,
}

impl VariantRecord {
    /// Create a record, deriving its identifier from the variant
    pub fn new(source_name: impl Into<String>, score_field: ScoreField, variant: Variant) -> Self {
        Self {
            id: variant.genomic_id(),
            source_name: source_name.into(),
            score_field,
            variant,
        }
    }

    /// Serialize as a compact JSON document
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            crate::Error::serialization(format!("Failed to serialize record {}", self.id), e)
        })
    }

    /// Serialize into a JSON value
    pub fn to_json_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| {
            crate::Error::serialization(format!("Failed to serialize record {}", self.id), e)
        })
    }
}

impl fmt::Display for VariantRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}={})", self.id, self.score_field, self.variant.score)
    }
}

impl Serialize for VariantRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(ID_KEY, &self.id)?;
        map.serialize_entry(
            &self.source_name,
            &LabelledVariant {
                variant: &self.variant,
                score_field: self.score_field,
            },
        )?;
        map.end()
    }
}

/// Variant view whose score key follows the configured label
struct LabelledVariant<'a> {
    variant: &'a Variant,
    score_field: ScoreField,
}

impl Serialize for LabelledVariant<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Variant", 4)?;
        state.serialize_field("chrom", &self.variant.chrom)?;
        state.serialize_field("start", &self.variant.start)?;
        state.serialize_field("end", &self.variant.end)?;
        state.serialize_field(self.score_field.as_str(), &self.variant.score)?;
        state.end()
    }
}
