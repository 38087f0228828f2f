//! Check model
//!
//! Represents one shared expense: who paid what and which people should
//! split the total.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::ids::{CheckId, GroupId};
use crate::error::{SplitError, SplitResult};

/// How sharer names are normalized when they are added to a check
///
/// Payer names are always lowercased. Sharer names historically keep the
/// caller's casing, which means a sharer entered as "Peter" will not merge
/// with a payer stored as "peter" during intersection reduction. The default
/// preserves that behavior; `Lowercase` folds sharer names the same way
/// payer names are folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Keep sharer names exactly as supplied
    #[default]
    AsEntered,
    /// Lowercase sharer names like payer names
    Lowercase,
}

impl CasePolicy {
    fn apply(&self, name: &str) -> String {
        match self {
            Self::AsEntered => name.to_string(),
            Self::Lowercase => name.to_lowercase(),
        }
    }
}

/// One recorded shared expense
///
/// Payments and sharers are added incrementally, then the check is handed to
/// the engine exactly once; the core never mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    /// Unique identifier
    pub id: CheckId,

    /// Settlement group this expense belongs to
    pub group_id: GroupId,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Accumulated amount paid per (lowercased) payer name
    payments: BTreeMap<String, Amount>,

    /// Names that split the total evenly
    sharers: BTreeSet<String>,

    /// Sharer-name normalization mode
    #[serde(default)]
    pub case_policy: CasePolicy,

    /// When the check was recorded
    pub created_at: DateTime<Utc>,
}

impl Check {
    /// Create a new check with an empty description
    pub fn new(group_id: GroupId) -> Self {
        Self::with_description(group_id, "")
    }

    /// Create a new check with a description
    pub fn with_description(group_id: GroupId, description: impl Into<String>) -> Self {
        Self {
            id: CheckId::new(),
            group_id,
            description: description.into(),
            payments: BTreeMap::new(),
            sharers: BTreeSet::new(),
            case_policy: CasePolicy::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the sharer-name normalization mode
    pub fn with_case_policy(mut self, case_policy: CasePolicy) -> Self {
        self.case_policy = case_policy;
        self
    }

    /// Record a payment toward this check
    ///
    /// Names are lowercased; repeated payments for the same name accumulate.
    /// The amount must be finite; sign is not validated here.
    pub fn add_payment(&mut self, name: &str, amount: Amount) -> SplitResult<()> {
        if !amount.is_finite() {
            return Err(SplitError::InvalidAmount(format!(
                "payment for '{}' is not a finite number",
                name
            )));
        }
        let entry = self
            .payments
            .entry(name.to_lowercase())
            .or_insert_with(Amount::zero);
        *entry += amount;
        Ok(())
    }

    /// Record several payments, as (name, amount) pairs
    pub fn add_payments<I, S>(&mut self, payments: I) -> SplitResult<()>
    where
        I: IntoIterator<Item = (S, Amount)>,
        S: AsRef<str>,
    {
        for (name, amount) in payments {
            self.add_payment(name.as_ref(), amount)?;
        }
        Ok(())
    }

    /// Add one person to the set splitting this check
    ///
    /// Duplicates are no-ops; casing follows the check's [`CasePolicy`].
    pub fn add_sharer(&mut self, name: &str) {
        self.sharers.insert(self.case_policy.apply(name));
    }

    /// Add several sharers
    pub fn add_sharers<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_sharer(name.as_ref());
        }
    }

    /// Accumulated payments per payer name
    pub fn payments(&self) -> &BTreeMap<String, Amount> {
        &self.payments
    }

    /// The set of people splitting the check
    pub fn sharers(&self) -> &BTreeSet<String> {
        &self.sharers
    }

    /// Total amount paid toward this check
    pub fn total(&self) -> Amount {
        self.payments.values().copied().sum()
    }
}
