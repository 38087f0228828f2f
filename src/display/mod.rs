//! Terminal display formatting
//!
//! Hand-formatted tables for the CLI; nothing here touches the engine
//! state.

pub mod debt;

pub use debt::{format_debt_list, format_net_positions};
