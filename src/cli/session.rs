//! Interactive session
//!
//! The menu-driven shell around the engine. Everything lives in memory for
//! the duration of the session and is gone on quit; the loop is generic
//! over its input and output streams so it can be driven from tests.

use std::fs::File;
use std::io::{BufRead, Write};

use crate::display::{format_debt_list, format_net_positions};
use crate::engine::DebtEngine;
use crate::error::SplitResult;
use crate::export::{export_group, ExportFormat};
use crate::models::{CasePolicy, Check, GroupId};

use super::input::{is_yes, parse_payment_spec};

/// Options for an interactive session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Group all checks of this session are booked to
    pub group_id: GroupId,
    /// Sharer-name normalization for new checks
    pub case_policy: CasePolicy,
}

/// Run the menu loop until the user quits or input ends
pub fn run_session<R, W>(
    engine: &mut DebtEngine,
    options: &SessionOptions,
    input: &mut R,
    output: &mut W,
) -> SplitResult<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to splitcheck!")?;
    loop {
        print_menu(output)?;
        write!(output, "Please enter your action (number): ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match line.trim() {
            "1" => add_check(engine, options, input, output)?,
            "2" => list_debts(engine, options, output)?,
            "3" => export_debts(engine, options, input, output)?,
            "4" => {
                writeln!(output, "Bye.")?;
                return Ok(());
            }
            other => writeln!(output, "Invalid action: '{}'", other)?,
        }
    }
}

fn print_menu<W: Write>(output: &mut W) -> SplitResult<()> {
    writeln!(output)?;
    writeln!(output, "Menu:")?;
    writeln!(output, "1. Add check")?;
    writeln!(output, "2. List debts")?;
    writeln!(output, "3. Export debts")?;
    writeln!(output, "4. Quit (everything will be lost..)")?;
    writeln!(output)?;
    Ok(())
}

fn print_header<W: Write>(output: &mut W, header: &str) -> SplitResult<()> {
    writeln!(output, "{}", "-".repeat(20))?;
    writeln!(output, "{}", header)?;
    writeln!(output, "{}", "-".repeat(20))?;
    Ok(())
}

/// Read one line, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> SplitResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt<R, W>(input: &mut R, output: &mut W, text: &str) -> SplitResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

fn add_check<R, W>(
    engine: &mut DebtEngine,
    options: &SessionOptions,
    input: &mut R,
    output: &mut W,
) -> SplitResult<()>
where
    R: BufRead,
    W: Write,
{
    print_header(output, "New check")?;

    let Some(description) = prompt(input, output, "Describe check: ")? else {
        return Ok(());
    };
    let mut check = Check::with_description(options.group_id.clone(), description)
        .with_case_policy(options.case_policy);

    writeln!(output, "Enter all payers")?;
    loop {
        let Some(entry) = prompt(
            input,
            output,
            "Please enter name and amount separated by a slash (e.g. 'peter/20'): ",
        )?
        else {
            return Ok(());
        };
        match parse_payment_spec(&entry) {
            Ok((name, amount)) => {
                if let Err(err) = check.add_payment(&name, amount) {
                    writeln!(output, "{}", err)?;
                    continue;
                }
            }
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        }
        let Some(answer) = prompt(input, output, "Add another payer? (y/n): ")? else {
            return Ok(());
        };
        if !is_yes(&answer) {
            break;
        }
    }

    writeln!(output)?;
    writeln!(
        output,
        "Enter the names of everyone who should split the check. (The check is split evenly)"
    )?;
    loop {
        let Some(name) = prompt(input, output, "Name: ")? else {
            return Ok(());
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        check.add_sharer(name);

        let Some(answer) = prompt(input, output, "Add another sharer? (y/n): ")? else {
            return Ok(());
        };
        if !is_yes(&answer) {
            break;
        }
    }

    match engine.submit(check) {
        Ok(()) => writeln!(output, "Check added.")?,
        Err(err) => writeln!(output, "Check rejected: {}", err)?,
    }
    Ok(())
}

fn list_debts<W: Write>(
    engine: &mut DebtEngine,
    options: &SessionOptions,
    output: &mut W,
) -> SplitResult<()> {
    print_header(output, "Debts")?;

    let debts = engine.debts_for(&options.group_id);
    write!(output, "{}", format_debt_list(&debts))?;
    if !debts.is_empty() {
        writeln!(output)?;
        write!(output, "{}", format_net_positions(&debts))?;
    }
    Ok(())
}

fn export_debts<R, W>(
    engine: &mut DebtEngine,
    options: &SessionOptions,
    input: &mut R,
    output: &mut W,
) -> SplitResult<()>
where
    R: BufRead,
    W: Write,
{
    print_header(output, "Export debts")?;

    let Some(format) = prompt(input, output, "Format (csv/json/yaml): ")? else {
        return Ok(());
    };
    let Some(format) = ExportFormat::parse(&format) else {
        writeln!(output, "Unknown format: '{}'", format.trim())?;
        return Ok(());
    };

    let Some(path) = prompt(input, output, "Write to file: ")? else {
        return Ok(());
    };
    let path = path.trim();
    if path.is_empty() {
        writeln!(output, "No file given.")?;
        return Ok(());
    }

    let mut file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            writeln!(output, "Cannot write '{}': {}", path, err)?;
            return Ok(());
        }
    };

    let group = engine.group_or_create(&options.group_id);
    match export_group(group, format, &mut file) {
        Ok(()) => writeln!(output, "Exported debts to {}.", path)?,
        Err(err) => writeln!(output, "Export failed: {}", err)?,
    }
    Ok(())
}
