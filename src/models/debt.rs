//! Normalized debt record
//!
//! The output-only value emitted when listing a group's debts: a direction
//! and a guaranteed-positive amount. Not persisted anywhere.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// A positive debt owed from one person to another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    /// The person who owes
    pub from: String,
    /// The person who is owed
    pub to: String,
    /// Amount owed, always positive
    pub amount: Amount,
}

impl Debt {
    /// Create a new debt record
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: Amount) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}
