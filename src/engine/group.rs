//! Debt group
//!
//! A group of checks split among a set of people, together with the running
//! ledger of who owes whom. Folding a check into the ledger works as
//! follows:
//!
//! 1. Every sharer owes an equal share of the check's total.
//! 2. People who both paid and share keep only their net position
//!    (intersection reduction), so nobody ends up owing themselves.
//! 3. Each remaining sharer owes each remaining payer that payer's
//!    receivable weighted by the sharer's portion of the remaining share
//!    total.
//!
//! The implied debts are staged and validated in full before the ledger or
//! the history is touched, so a rejected check leaves the group unchanged.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{SplitError, SplitResult};
use crate::models::{Amount, Check, Debt, GroupId};

use super::ledger::Ledger;

/// A debt staged during a fold: (debtor, creditor, amount)
type StagedDebt = (String, String, Amount);

/// A group of checks and the running debts between its members
#[derive(Debug, Clone)]
pub struct DebtGroup {
    group_id: GroupId,
    checks: Vec<Check>,
    ledger: Ledger,
}

impl DebtGroup {
    /// Create an empty group
    pub fn new(group_id: GroupId) -> Self {
        Self {
            group_id,
            checks: Vec::new(),
            ledger: Ledger::new(),
        }
    }

    /// The group's identifier
    pub fn group_id(&self) -> &GroupId {
        &self.group_id
    }

    /// Every check ever applied, in submission order
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Apply a check to the group
    ///
    /// Stages the check's implied debts, folds them into the ledger, and
    /// appends the check to the history. Fails with
    /// [`SplitError::EmptySharers`] when nobody shares the check; on any
    /// error the group is left untouched.
    pub fn add_check(&mut self, check: Check) -> SplitResult<()> {
        let staged = self.stage_debts(&check)?;
        debug!(
            group = %self.group_id,
            check = %check.id,
            total = %check.total(),
            debts = staged.len(),
            "applying check"
        );
        for (from, to, amount) in staged {
            self.ledger.update_edge(&from, &to, amount)?;
        }
        self.checks.push(check);
        Ok(())
    }

    /// Current debts of the group, every amount positive
    ///
    /// Each call returns an independent, freshly built list; order is
    /// unspecified.
    pub fn normalized_debts(&self) -> Vec<Debt> {
        self.ledger.normalized_debts()
    }

    /// Compute the debts a check implies without mutating anything
    fn stage_debts(&self, check: &Check) -> SplitResult<Vec<StagedDebt>> {
        if check.sharers().is_empty() {
            return Err(SplitError::EmptySharers {
                check: check.id.to_string(),
            });
        }

        let total = check.total();
        let equal_share = Amount::new(total.value() / check.sharers().len() as f64);

        let mut payers: BTreeMap<String, Amount> = check.payments().clone();
        let mut shares: BTreeMap<String, Amount> = check
            .sharers()
            .iter()
            .map(|name| (name.clone(), equal_share))
            .collect();

        Self::reduce_intersection(&mut payers, &mut shares);

        // Invariant: reduction moves value between the two maps without
        // creating or destroying any, so the remaining totals must agree.
        let payer_total: Amount = payers.values().copied().sum();
        let share_total: Amount = shares.values().copied().sum();
        if !payer_total.approx_eq(share_total) {
            return Err(SplitError::Imbalance {
                group: self.group_id.to_string(),
                payer_total: payer_total.value(),
                sharer_total: share_total.value(),
            });
        }

        // Everyone settled against themselves, or there was nothing to
        // split: the check implies no debts.
        if payers.is_empty() || shares.is_empty() || share_total.is_zero() {
            return Ok(Vec::new());
        }

        let mut staged = Vec::with_capacity(payers.len() * shares.len());
        for (sharer, share) in &shares {
            let fraction = share.value() / share_total.value();
            for (payer, receivable) in &payers {
                let amount = *receivable * fraction;
                if !amount.is_finite() || amount.value() <= 0.0 {
                    return Err(SplitError::InvalidDebt {
                        from: sharer.clone(),
                        to: payer.clone(),
                        amount: amount.value(),
                    });
                }
                staged.push((sharer.clone(), payer.clone(), amount));
            }
        }
        Ok(staged)
    }

    /// People present on both sides only owe (or are owed) their net:
    /// consume the smaller of the two entries and shrink the other
    fn reduce_intersection(
        payers: &mut BTreeMap<String, Amount>,
        shares: &mut BTreeMap<String, Amount>,
    ) {
        let both: Vec<String> = payers
            .keys()
            .filter(|name| shares.contains_key(*name))
            .cloned()
            .collect();

        for name in both {
            let paid = payers[&name];
            let share = shares[&name];
            if paid < share {
                let reduced = share - paid;
                debug_assert!(reduced.value() > 0.0);
                shares.insert(name.clone(), reduced);
                payers.remove(&name);
            } else {
                shares.remove(&name);
                let remaining = paid - share;
                if remaining.is_zero() {
                    payers.remove(&name);
                } else {
                    payers.insert(name, remaining);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::CasePolicy;

    fn new_group() -> DebtGroup {
        DebtGroup::new(GroupId::new("group").unwrap())
    }

    fn check(payments: &[(&str, f64)], sharers: &[&str]) -> Check {
        let mut check = Check::new(GroupId::new("group").unwrap());
        check
            .add_payments(payments.iter().map(|(name, value)| (*name, Amount::new(*value))))
            .unwrap();
        check.add_sharers(sharers.iter().copied());
        check
    }

    fn find<'a>(debts: &'a [Debt], from: &str, to: &str) -> &'a Debt {
        debts
            .iter()
            .find(|d| d.from == from && d.to == to)
            .unwrap_or_else(|| panic!("no debt {} -> {}", from, to))
    }

    #[test]
    fn test_two_payers_both_sharing_net_to_single_debt() {
        let mut group = new_group();
        group
            .add_check(check(&[("p", 10.0), ("j", 15.0)], &["p", "j"]))
            .unwrap();

        let debts = group.normalized_debts();
        assert_eq!(debts.len(), 1);
        assert!(find(&debts, "p", "j").amount.approx_eq(Amount::new(2.5)));
    }

    #[test]
    fn test_sole_payer_shared_two_ways() {
        let mut group = new_group();
        group
            .add_check(check(&[("p", 100.0)], &["p", "j"]))
            .unwrap();

        let debts = group.normalized_debts();
        assert_eq!(debts.len(), 1);
        assert!(find(&debts, "j", "p").amount.approx_eq(Amount::new(50.0)));
    }

    #[test]
    fn test_sole_payer_three_outside_sharers() {
        let mut group = new_group();
        group
            .add_check(check(&[("p", 120.0)], &["f", "r", "j"]))
            .unwrap();

        let debts = group.normalized_debts();
        assert_eq!(debts.len(), 3);
        for sharer in ["f", "r", "j"] {
            assert!(find(&debts, sharer, "p").amount.approx_eq(Amount::new(40.0)));
        }
    }

    #[test]
    fn test_partial_payer_reduction() {
        // p and j each paid 10 and also share; f shares without paying.
        // Each owes 20/3, leaving p and j with 10/3 receivable each.
        let mut group = new_group();
        group
            .add_check(check(&[("p", 10.0), ("j", 10.0)], &["p", "j", "f"]))
            .unwrap();

        let debts = group.normalized_debts();
        assert_eq!(debts.len(), 2);
        assert!(find(&debts, "f", "p").amount.approx_eq(Amount::new(10.0 / 3.0)));
        assert!(find(&debts, "f", "j").amount.approx_eq(Amount::new(10.0 / 3.0)));
    }

    #[test]
    fn test_outside_sharers_split_proportionally_across_payers() {
        let mut group = new_group();
        group
            .add_check(check(&[("p", 10.0), ("j", 12.0)], &["f", "r"]))
            .unwrap();

        let debts = group.normalized_debts();
        assert_eq!(debts.len(), 4);
        assert!(find(&debts, "f", "p").amount.approx_eq(Amount::new(5.0)));
        assert!(find(&debts, "f", "j").amount.approx_eq(Amount::new(6.0)));
        assert!(find(&debts, "r", "p").amount.approx_eq(Amount::new(5.0)));
        assert!(find(&debts, "r", "j").amount.approx_eq(Amount::new(6.0)));
    }

    #[test]
    fn test_empty_sharers_rejected_and_group_unchanged() {
        let mut group = new_group();
        let err = group.add_check(check(&[("p", 10.0)], &[])).unwrap_err();

        assert!(matches!(err, SplitError::EmptySharers { .. }));
        assert!(group.normalized_debts().is_empty());
        assert!(group.checks().is_empty());
    }

    #[test]
    fn test_sole_payer_sole_sharer_creates_no_edge() {
        let mut group = new_group();
        group.add_check(check(&[("p", 10.0)], &["p"])).unwrap();

        assert!(group.normalized_debts().is_empty());
        assert_eq!(group.checks().len(), 1);
    }

    #[test]
    fn test_equal_and_opposite_checks_leave_no_edge() {
        let mut group = new_group();
        group
            .add_check(check(&[("p", 100.0)], &["p", "j"]))
            .unwrap();
        group
            .add_check(check(&[("j", 100.0)], &["p", "j"]))
            .unwrap();

        assert!(group.normalized_debts().is_empty());
        assert_eq!(group.checks().len(), 2);
    }

    #[test]
    fn test_per_person_nets_balance_across_checks() {
        let mut group = new_group();
        group
            .add_check(check(&[("a", 30.0)], &["a", "b", "c"]))
            .unwrap();
        group
            .add_check(check(&[("b", 30.0)], &["a", "b", "c"]))
            .unwrap();
        group
            .add_check(check(&[("c", 12.0)], &["a", "c"]))
            .unwrap();

        let mut nets: BTreeMap<String, f64> = BTreeMap::new();
        for debt in group.normalized_debts() {
            *nets.entry(debt.from.clone()).or_default() -= debt.amount.value();
            *nets.entry(debt.to.clone()).or_default() += debt.amount.value();
        }

        // paid minus owed share, per person
        assert!((nets["a"] - 4.0).abs() < 1e-3);
        assert!((nets["b"] - 10.0).abs() < 1e-3);
        assert!((nets["c"] + 14.0).abs() < 1e-3);
        assert!(nets.values().sum::<f64>().abs() < 1e-3);
    }

    #[test]
    fn test_repeated_queries_return_equal_sets() {
        let mut group = new_group();
        group
            .add_check(check(&[("p", 120.0)], &["f", "r", "j"]))
            .unwrap();

        let sort = |mut debts: Vec<Debt>| {
            debts.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
            debts
        };
        assert_eq!(
            sort(group.normalized_debts()),
            sort(group.normalized_debts())
        );
    }

    #[test]
    fn test_payment_order_does_not_change_the_result() {
        let mut first = new_group();
        first
            .add_check(check(&[("p", 10.0), ("j", 15.0)], &["p", "j"]))
            .unwrap();

        let mut second = new_group();
        second
            .add_check(check(&[("j", 15.0), ("p", 10.0)], &["j", "p"]))
            .unwrap();

        let sort = |mut debts: Vec<Debt>| {
            debts.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
            debts
        };
        let first = sort(first.normalized_debts());
        let second = sort(second.normalized_debts());
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!((&a.from, &a.to), (&b.from, &b.to));
            assert!(a.amount.approx_eq(b.amount));
        }
    }

    #[test]
    fn test_capitalized_sharer_does_not_merge_by_default() {
        // The payer is stored lowercased; the sharer keeps its casing and
        // therefore fails to reduce against the payer entry.
        let mut group = new_group();
        let mut check = Check::new(GroupId::new("group").unwrap());
        check.add_payment("Peter", Amount::new(100.0)).unwrap();
        check.add_sharers(["Peter", "j"]);
        group.add_check(check).unwrap();

        let debts = group.normalized_debts();
        assert_eq!(debts.len(), 2);
        assert!(find(&debts, "Peter", "peter")
            .amount
            .approx_eq(Amount::new(50.0)));
        assert!(find(&debts, "j", "peter").amount.approx_eq(Amount::new(50.0)));
    }

    #[test]
    fn test_lowercase_policy_merges_payer_and_sharer() {
        let mut group = new_group();
        let mut check =
            Check::new(GroupId::new("group").unwrap()).with_case_policy(CasePolicy::Lowercase);
        check.add_payment("Peter", Amount::new(100.0)).unwrap();
        check.add_sharers(["Peter", "j"]);
        group.add_check(check).unwrap();

        let debts = group.normalized_debts();
        assert_eq!(debts.len(), 1);
        assert!(find(&debts, "j", "peter").amount.approx_eq(Amount::new(50.0)));
    }

    #[test]
    fn test_zero_total_check_is_a_noop() {
        let mut group = new_group();
        group.add_check(check(&[], &["a", "b"])).unwrap();

        assert!(group.normalized_debts().is_empty());
        assert_eq!(group.checks().len(), 1);
    }

    #[test]
    fn test_zero_payment_rejected_atomically() {
        let mut group = new_group();
        let err = group
            .add_check(check(&[("p", 5.0), ("z", 0.0)], &["j"]))
            .unwrap_err();

        assert!(err.is_internal_fault());
        assert!(group.normalized_debts().is_empty());
        assert!(group.checks().is_empty());
    }

    #[test]
    fn test_checks_accumulate_in_history() {
        let mut group = new_group();
        group
            .add_check(check(&[("p", 10.0)], &["p", "j"]))
            .unwrap();
        group
            .add_check(check(&[("j", 10.0)], &["p", "j"]))
            .unwrap();

        assert_eq!(group.checks().len(), 2);
        assert!(group.normalized_debts().is_empty());
    }
}
