//! Debt display formatting
//!
//! Formats normalized debt lists for terminal output in table form.

use std::collections::BTreeMap;

use crate::models::{Amount, Debt};

/// Format a list of debts as an aligned table
///
/// Rows are sorted by debtor then creditor so repeated listings line up.
pub fn format_debt_list(debts: &[Debt]) -> String {
    if debts.is_empty() {
        return "No outstanding debts.\n".to_string();
    }

    let mut rows: Vec<&Debt> = debts.iter().collect();
    rows.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));

    // Calculate column widths
    let from_width = rows
        .iter()
        .map(|d| d.from.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let to_width = rows.iter().map(|d| d.to.len()).max().unwrap_or(2).max(2);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<from_width$}  {:<to_width$}  {:>10}\n",
        "From",
        "To",
        "Amount",
        from_width = from_width,
        to_width = to_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:-<from_width$}  {:-<to_width$}  {:->10}\n",
        "",
        "",
        "",
        from_width = from_width,
        to_width = to_width,
    ));

    for debt in rows {
        output.push_str(&format!(
            "{:<from_width$}  {:<to_width$}  {:>10}\n",
            debt.from,
            debt.to,
            debt.amount.to_string(),
            from_width = from_width,
            to_width = to_width,
        ));
    }

    output
}

/// Format each person's net position across a debt list
///
/// Positive means the person is owed money, negative that they owe.
pub fn format_net_positions(debts: &[Debt]) -> String {
    if debts.is_empty() {
        return String::new();
    }

    let mut nets: BTreeMap<&str, Amount> = BTreeMap::new();
    for debt in debts {
        *nets.entry(debt.from.as_str()).or_insert_with(Amount::zero) -= debt.amount;
        *nets.entry(debt.to.as_str()).or_insert_with(Amount::zero) += debt.amount;
    }

    let name_width = nets.keys().map(|n| n.len()).max().unwrap_or(6).max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>10}\n",
        "Person",
        "Net",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->10}\n",
        "",
        "",
        name_width = name_width,
    ));
    for (name, net) in &nets {
        output.push_str(&format!(
            "{:<name_width$}  {:>10}\n",
            name,
            net.to_string(),
            name_width = name_width,
        ));
    }

    output
}
