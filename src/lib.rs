//! splitcheck - shared-expense splitting and debt settlement
//!
//! This library tracks shared expenses ("checks") among groups of people
//! and maintains the minimal set of pairwise debts needed to settle them.
//! Each check records who paid what and who splits the total; folding a
//! check into a group's ledger reconciles payers against sharers and merges
//! the implied debts into a signed-edge graph, collapsing opposite debts
//! and dropping settled ones.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, checks, debts, ids)
//! - `engine`: The settlement core (ledger, groups, engine registry)
//! - `cli`: Interactive session and one-shot command handlers
//! - `display`: Terminal formatting of debt lists
//! - `export`: CSV/JSON/YAML exporters
//! - `logging`: Tracing subscriber setup for the binary
//!
//! # Example
//!
//! ```
//! use splitcheck::{Amount, Check, DebtEngine, GroupId};
//!
//! # fn main() -> splitcheck::SplitResult<()> {
//! let group = GroupId::new("trip")?;
//! let mut check = Check::with_description(group.clone(), "dinner");
//! check.add_payment("peter", Amount::new(100.0))?;
//! check.add_sharers(["peter", "jane"]);
//!
//! let mut engine = DebtEngine::new();
//! engine.submit(check)?;
//!
//! let debts = engine.debts_for(&group);
//! assert_eq!(debts.len(), 1);
//! assert_eq!(debts[0].from, "jane");
//! assert_eq!(debts[0].to, "peter");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;

pub use engine::{DebtEngine, DebtGroup, Ledger};
pub use error::{SplitError, SplitResult};
pub use models::{Amount, CasePolicy, Check, Debt, GroupId};
