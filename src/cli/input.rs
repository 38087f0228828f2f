//! Interactive input parsing
//!
//! Helpers for the line-based prompts the interactive session uses.

use crate::error::{SplitError, SplitResult};
use crate::models::Amount;

/// Parse a payer entry in the `name/amount` form (e.g. `peter/20`)
pub fn parse_payment_spec(input: &str) -> SplitResult<(String, Amount)> {
    let (name, amount) = input.split_once('/').ok_or_else(|| {
        SplitError::Validation(format!(
            "expected 'name/amount' (e.g. 'peter/20'), got '{}'",
            input.trim()
        ))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(SplitError::Validation(
            "payer name must not be empty".into(),
        ));
    }

    let amount = Amount::parse(amount.trim())?;
    Ok((name.to_string(), amount))
}

/// Interpret a yes/no answer; anything but `y`/`yes` counts as no
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
