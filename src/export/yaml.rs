//! YAML export
//!
//! Human-readable variant of the full group export document.

use std::io::Write;

use crate::engine::DebtGroup;
use crate::error::SplitResult;

use super::json::GroupExport;

/// Write a group export as YAML
pub fn export_group_yaml<W: Write>(group: &DebtGroup, writer: &mut W) -> SplitResult<()> {
    let export = GroupExport::from_group(group);
    serde_yaml::to_writer(writer, &export)?;
    Ok(())
}
