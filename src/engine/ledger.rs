//! Signed-edge debt ledger
//!
//! The running net obligations of one group, stored as a directed weighted
//! graph with a single entry per unordered pair of names. Whichever
//! direction is inserted first fixes the canonical key for that pair; a
//! positive value means the first name owes the second, a negative value
//! the reverse. An edge that settles to zero is removed, so the graph only
//! ever holds live debts.

use std::collections::HashMap;

use crate::error::{SplitError, SplitResult};
use crate::models::{Amount, Debt};

/// Running net-debt graph for one group
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    edges: HashMap<(String, String), Amount>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the ledger has no outstanding debts
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Record a debt of `delta` owed from `from` to `to`
    ///
    /// `delta` must be strictly positive. If the opposite direction already
    /// has an edge, the debt is subtracted from that edge instead of adding
    /// a second one; an edge that ends up within tolerance of zero is
    /// removed.
    pub fn update_edge(&mut self, from: &str, to: &str, delta: Amount) -> SplitResult<()> {
        if !delta.is_finite() || delta.value() <= 0.0 {
            return Err(SplitError::InvalidDebt {
                from: from.to_string(),
                to: to.to_string(),
                amount: delta.value(),
            });
        }

        let reversed = (to.to_string(), from.to_string());
        let (key, signed) = if self.edges.contains_key(&reversed) {
            (reversed, -delta)
        } else {
            ((from.to_string(), to.to_string()), delta)
        };

        let next = self.edges.get(&key).copied().unwrap_or_else(Amount::zero) + signed;
        if next.is_zero() {
            self.edges.remove(&key);
        } else {
            self.edges.insert(key, next);
        }
        Ok(())
    }

    /// Materialize the current debts with every amount positive
    ///
    /// Edges stored with a negative value are emitted with `from` and `to`
    /// swapped. Each call builds a fresh, independent list; iteration order
    /// is unspecified.
    pub fn normalized_debts(&self) -> Vec<Debt> {
        self.edges
            .iter()
            .map(|((first, second), amount)| {
                if amount.value() < 0.0 {
                    Debt::new(second.clone(), first.clone(), -*amount)
                } else {
                    Debt::new(first.clone(), second.clone(), *amount)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_insertion_fixes_canonical_direction() {
        let mut ledger = Ledger::new();
        ledger.update_edge("p", "j", Amount::new(50.0)).unwrap();

        let debts = ledger.normalized_debts();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].from, "p");
        assert_eq!(debts[0].to, "j");
        assert_eq!(debts[0].amount.value(), 50.0);
    }

    #[test]
    fn test_opposite_direction_reduces_existing_edge() {
        let mut ledger = Ledger::new();
        ledger.update_edge("p", "j", Amount::new(50.0)).unwrap();
        ledger.update_edge("j", "p", Amount::new(20.0)).unwrap();

        let debts = ledger.normalized_debts();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].from, "p");
        assert_eq!(debts[0].to, "j");
        assert!(debts[0].amount.approx_eq(Amount::new(30.0)));
    }

    #[test]
    fn test_negative_edge_is_flipped_when_normalized() {
        let mut ledger = Ledger::new();
        ledger.update_edge("p", "j", Amount::new(20.0)).unwrap();
        ledger.update_edge("j", "p", Amount::new(50.0)).unwrap();

        let debts = ledger.normalized_debts();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].from, "j");
        assert_eq!(debts[0].to, "p");
        assert!(debts[0].amount.approx_eq(Amount::new(30.0)));
    }

    #[test]
    fn test_settled_edge_is_removed() {
        let mut ledger = Ledger::new();
        ledger.update_edge("p", "j", Amount::new(50.0)).unwrap();
        ledger.update_edge("j", "p", Amount::new(50.0)).unwrap();

        assert!(ledger.is_empty());
        assert!(ledger.normalized_debts().is_empty());
    }

    #[test]
    fn test_non_positive_delta_rejected() {
        let mut ledger = Ledger::new();
        let err = ledger.update_edge("p", "j", Amount::zero()).unwrap_err();
        assert!(err.is_internal_fault());
        assert!(ledger
            .update_edge("p", "j", Amount::new(-1.0))
            .is_err());
        assert!(ledger
            .update_edge("p", "j", Amount::new(f64::NAN))
            .is_err());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_distinct_pairs_get_distinct_edges() {
        let mut ledger = Ledger::new();
        ledger.update_edge("f", "p", Amount::new(40.0)).unwrap();
        ledger.update_edge("r", "p", Amount::new(40.0)).unwrap();
        ledger.update_edge("j", "p", Amount::new(40.0)).unwrap();

        assert_eq!(ledger.edge_count(), 3);
    }
}
