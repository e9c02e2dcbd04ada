use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel target type for a replicate type with no counterpart.
pub const UNRESOLVED: &str = "N/A";

/// One row of a vendor documentation table.
///
/// On a source page the left cell is the source type and the right cell the
/// replicate type; on a target page the left cell is the replicate type and
/// the right cell the target type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingEntry {
    pub source_or_replicate_type: String,
    pub replicate_or_target_type: String,
}

impl MappingEntry {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            source_or_replicate_type: left.into(),
            replicate_or_target_type: right.into(),
        }
    }
}

/// One guarded branch of a mapping cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedCondition {
    /// Base type name, possibly followed by a bracketed detail.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Natural language guard, `None` for an unconditional mapping.
    pub condition: Option<String>,
    #[serde(default)]
    pub kind: GuardKind,
}

impl ParsedCondition {
    pub fn unconditional(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            condition: None,
            kind: GuardKind::Unconditional,
        }
    }
}

/// Classification of a guard. Advisory only, matching never looks at it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum GuardKind {
    #[default]
    Unconditional,
    Scale(ScaleRule),
    Precision(PrecisionRule),
    Length,
    /// "all other cases", "default", "otherwise"
    Default,
    Generic,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScaleRule {
    Negative,
    Zero,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PrecisionRule {
    Zero,
    AtMost2,
    Between2And4,
    Between4And9,
    Above9,
    Other,
}

/// A resolved source → replicate → target row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombinedRow {
    pub source_type: String,
    pub replicate_type: String,
    pub target_type: String,
}

impl CombinedRow {
    pub fn is_resolved(&self) -> bool {
        self.target_type != UNRESOLVED
    }
}

/// The scraped documentation table of one database.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseMappings {
    pub data_types: Vec<MappingEntry>,
    #[serde(default)]
    pub url: String,
}

/// Every scraped source and target database, keyed by database label.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MappingCatalog {
    #[serde(default)]
    pub sources: BTreeMap<String, DatabaseMappings>,
    #[serde(default)]
    pub targets: BTreeMap<String, DatabaseMappings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl MappingCatalog {
    pub fn source_names(&self) -> Vec<String> {
        self.sources.keys().cloned().collect()
    }

    pub fn target_names(&self) -> Vec<String> {
        self.targets.keys().cloned().collect()
    }
}

/// Combined rows for one source/target pair plus the pages they came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombinedTable {
    pub table_data: Vec<CombinedRow>,
    pub source_url: String,
    pub target_url: String,
}
