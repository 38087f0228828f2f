//! Core debt-settlement engine
//!
//! The stateful heart of the crate, split into three pieces:
//!
//! - [`Ledger`]: the signed-edge graph of net obligations for one group
//! - [`DebtGroup`]: check history plus ledger, and the fold that applies a
//!   check to the graph
//! - [`DebtEngine`]: the registry routing checks and queries to groups

pub mod group;
pub mod ledger;
pub mod registry;

pub use group::DebtGroup;
pub use ledger::Ledger;
pub use registry::DebtEngine;
