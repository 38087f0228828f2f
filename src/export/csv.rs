//! CSV export
//!
//! Spreadsheet-friendly export of a group's normalized debts, one row per
//! debt.

use std::io::Write;

use crate::error::SplitResult;
use crate::models::Debt;

/// Write debts as CSV with a `from,to,amount` header
pub fn export_debts_csv<W: Write>(debts: &[Debt], writer: &mut W) -> SplitResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["from", "to", "amount"])?;
    for debt in debts {
        csv_writer.write_record([
            debt.from.as_str(),
            debt.to.as_str(),
            &debt.amount.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}
