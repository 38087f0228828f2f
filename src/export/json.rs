//! JSON export
//!
//! Machine-readable export of one group's state: the check history plus the
//! current normalized debts.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::DebtGroup;
use crate::error::SplitResult;
use crate::models::{Check, Debt};

/// Version stamp for the export document layout
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Full export document for one group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupExport {
    pub schema_version: u32,
    pub group_id: String,
    pub generated_at: DateTime<Utc>,
    pub checks: Vec<Check>,
    pub debts: Vec<Debt>,
}

impl GroupExport {
    /// Snapshot a group for export
    pub fn from_group(group: &DebtGroup) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            group_id: group.group_id().to_string(),
            generated_at: Utc::now(),
            checks: group.checks().to_vec(),
            debts: group.normalized_debts(),
        }
    }
}

/// Write a group export as pretty-printed JSON
pub fn export_group_json<W: Write>(group: &DebtGroup, writer: &mut W) -> SplitResult<()> {
    let export = GroupExport::from_group(group);
    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writer.write_all(b"\n")?;
    Ok(())
}
