//! Debt engine registry
//!
//! Routes submitted checks and debt queries to the owning group. Groups are
//! created on first use; creation-on-miss goes through [`DebtEngine::group_or_create`]
//! so it stays an explicit branch rather than a side effect of lookup.
//!
//! The engine owns all of its state. It is single-threaded by design; an
//! embedding system that shares one engine across threads should wrap it in
//! a `Mutex` or `RwLock`.

use std::collections::HashMap;

use tracing::debug;

use crate::error::SplitResult;
use crate::models::{Check, Debt, GroupId};

use super::group::DebtGroup;

/// Registry of debt groups, keyed by group id
#[derive(Debug, Default)]
pub struct DebtEngine {
    groups: HashMap<GroupId, DebtGroup>,
}

impl DebtEngine {
    /// Create an engine with no groups
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a check to the group it belongs to, creating the group on
    /// first use
    pub fn submit(&mut self, check: Check) -> SplitResult<()> {
        let group_id = check.group_id.clone();
        self.group_or_create(&group_id).add_check(check)
    }

    /// Submit several checks in order, stopping at the first failure
    pub fn submit_all<I>(&mut self, checks: I) -> SplitResult<()>
    where
        I: IntoIterator<Item = Check>,
    {
        for check in checks {
            self.submit(check)?;
        }
        Ok(())
    }

    /// Current normalized debts for a group
    ///
    /// A group id that has never been used yields an empty list, not an
    /// error; the group is created, matching submission semantics. Each
    /// call returns an independent, freshly built list.
    pub fn debts_for(&mut self, group_id: &GroupId) -> Vec<Debt> {
        self.group_or_create(group_id).normalized_debts()
    }

    /// The group for `group_id`, if it has ever been used
    pub fn group(&self, group_id: &GroupId) -> Option<&DebtGroup> {
        self.groups.get(group_id)
    }

    /// Number of groups the engine has seen
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Look up a group, creating an empty one on miss
    pub fn group_or_create(&mut self, group_id: &GroupId) -> &mut DebtGroup {
        self.groups.entry(group_id.clone()).or_insert_with(|| {
            debug!(group = %group_id, "creating debt group");
            DebtGroup::new(group_id.clone())
        })
    }
}
