use anyhow::Result;
use clap::{Parser, Subcommand};

use splitcheck::cli::{handle_split, run_session, SessionOptions, SplitArgs};
use splitcheck::engine::DebtEngine;
use splitcheck::logging;
use splitcheck::models::{CasePolicy, GroupId};

#[derive(Parser)]
#[command(
    name = "splitcheck",
    version,
    about = "Split shared checks and settle the debts",
    long_about = "splitcheck tracks shared expenses among a group of people and \
                  computes the pairwise debts needed to settle them. Run it \
                  without arguments for the interactive menu, or use the 'split' \
                  subcommand to settle a single check from the command line."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    #[command(alias = "ui")]
    Interactive {
        /// Settlement group id for the session
        #[arg(short, long, default_value = "default")]
        group: String,

        /// Lowercase sharer names so they merge with payer entries
        #[arg(long)]
        fold_sharer_case: bool,
    },

    /// Split a single check given on the command line
    Split(SplitArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Split(args)) => handle_split(args)?,
        Some(Commands::Interactive {
            group,
            fold_sharer_case,
        }) => run_interactive(&group, fold_sharer_case)?,
        None => run_interactive("default", false)?,
    }
    Ok(())
}

fn run_interactive(group: &str, fold_sharer_case: bool) -> Result<()> {
    let options = SessionOptions {
        group_id: GroupId::new(group)?,
        case_policy: if fold_sharer_case {
            CasePolicy::Lowercase
        } else {
            CasePolicy::AsEntered
        },
    };
    tracing::debug!(group = %options.group_id, "starting interactive session");

    let mut engine = DebtEngine::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&mut engine, &options, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
