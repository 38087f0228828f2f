//! Export module for splitcheck
//!
//! Write-only exporters for a group's state:
//! - CSV: the normalized debts, one row each (spreadsheet-compatible)
//! - JSON: the full group document, machine-readable
//! - YAML: the full group document, human-readable
//!
//! Nothing here reads data back; persistence stays out of scope.

use std::fmt;
use std::io::Write;

use crate::engine::DebtGroup;
use crate::error::SplitResult;

pub mod csv;
pub mod json;
pub mod yaml;

pub use json::{export_group_json, GroupExport, EXPORT_SCHEMA_VERSION};
pub use self::csv::export_debts_csv;
pub use yaml::export_group_yaml;

/// Supported export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// Parse a format name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Write a group in the given format
pub fn export_group<W: Write>(
    group: &DebtGroup,
    format: ExportFormat,
    writer: &mut W,
) -> SplitResult<()> {
    match format {
        ExportFormat::Csv => export_debts_csv(&group.normalized_debts(), writer),
        ExportFormat::Json => export_group_json(group, writer),
        ExportFormat::Yaml => export_group_yaml(group, writer),
    }
}
