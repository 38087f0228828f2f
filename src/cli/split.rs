//! One-shot split command
//!
//! Submits a single check built from command-line flags and prints the
//! resulting debts.

use std::fs::File;
use std::path::PathBuf;

use clap::Args;

use crate::display::{format_debt_list, format_net_positions};
use crate::engine::DebtEngine;
use crate::error::{SplitError, SplitResult};
use crate::export::{export_group, ExportFormat};
use crate::models::{CasePolicy, Check, GroupId};

use super::input::parse_payment_spec;

/// Arguments for the `split` subcommand
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Payment in the form 'name/amount' (repeatable)
    #[arg(short = 'p', long = "payment", required = true, value_name = "NAME/AMOUNT")]
    pub payments: Vec<String>,

    /// Name of someone splitting the check (repeatable, commas allowed)
    #[arg(
        short = 's',
        long = "sharer",
        required = true,
        value_delimiter = ',',
        value_name = "NAME"
    )]
    pub sharers: Vec<String>,

    /// Check description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Settlement group id
    #[arg(short, long, default_value = "default")]
    pub group: String,

    /// Lowercase sharer names so they merge with payer entries
    #[arg(long)]
    pub fold_sharer_case: bool,

    /// Write the resulting debts to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Export format: csv, json or yaml
    #[arg(short = 'f', long, default_value = "csv", value_name = "FORMAT")]
    pub format: String,
}

/// Handle the `split` subcommand
pub fn handle_split(args: SplitArgs) -> SplitResult<()> {
    let group_id = GroupId::new(&args.group)?;
    let case_policy = if args.fold_sharer_case {
        CasePolicy::Lowercase
    } else {
        CasePolicy::AsEntered
    };

    let mut check =
        Check::with_description(group_id.clone(), &args.description).with_case_policy(case_policy);
    for spec in &args.payments {
        let (name, amount) = parse_payment_spec(spec)?;
        check.add_payment(&name, amount)?;
    }
    check.add_sharers(&args.sharers);

    let mut engine = DebtEngine::new();
    engine.submit(check)?;

    let debts = engine.debts_for(&group_id);
    print!("{}", format_debt_list(&debts));
    if !debts.is_empty() {
        println!();
        print!("{}", format_net_positions(&debts));
    }

    if let Some(path) = &args.output {
        let format = ExportFormat::parse(&args.format).ok_or_else(|| {
            SplitError::Validation(format!(
                "unknown export format '{}'; expected csv, json or yaml",
                args.format
            ))
        })?;
        let mut file = File::create(path)?;
        let group = engine.group_or_create(&group_id);
        export_group(group, format, &mut file)?;
        println!("Exported debts to {}", path.display());
    }

    Ok(())
}
