// src/commands/cli.rs
use clap::Parser;
use itertools::Itertools;
use log::info;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use thiserror::Error;

use crate::core::file_system::{PreferenceStore, StoreError};
use crate::core::models::{Account, Budget, UserPreferences};
use crate::core::runway::sum_expenses;

#[derive(Parser, Debug, Default)]
#[command(name = "emergency_fund_cli", about = "Report how many months your emergency fund would last")]
pub struct CliArgs {
    /// Ignore the saved selection and choose the emergency fund again
    #[arg(long)]
    pub reset: bool,

    /// Where the emergency fund selection is stored
    #[arg(long)]
    pub prefs_file: Option<String>,
}

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Could not access the terminal: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
    #[error("Invalid account number: {0:?}")]
    InvalidIndex(String),
    #[error("Account number {index} does not exist ({count} accounts listed)")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("Invalid monthly expenses: {0:?}")]
    InvalidExpenses(String),
    #[error("Could not save the selection: {source}")]
    Save {
        #[from]
        source: StoreError,
    },
}

/// Asks which accounts make up the emergency fund and what is spent per
/// month, saves the answer and returns it.
pub fn select_emergency_fund<R: BufRead, W: Write>(
    accounts: &[Account],
    budget: &Budget,
    store: &PreferenceStore,
    input: &mut R,
    output: &mut W,
) -> Result<UserPreferences, SelectionError> {
    writeln!(output, "Your current expense budget: {}\n", budget_hint(budget))?;
    print_accounts(accounts, output)?;

    let selection = prompt(input, output, "\nSelect emergency fund accounts (comma-separated numbers): ")?;
    let indices = parse_account_indices(&selection, accounts.len())?;

    let expenses = prompt(input, output, "\nInput your monthly expenses: ")?;
    let monthly_expenses = parse_monthly_expenses(&expenses)?;

    let prefs = UserPreferences::new(indices.into_iter().map(|idx| accounts[idx].id()), monthly_expenses);
    store.save(&prefs)?;
    info!(
        "Emergency fund set to accounts [{}] with monthly expenses {}",
        prefs.account_ids.iter().join(", "),
        prefs.monthly_expenses
    );

    Ok(prefs)
}

/// Whole part of the budgeted spend. Non-finite sums are shown as is.
pub fn budget_hint(budget: &Budget) -> f64 {
    // Adding 0.0 turns a truncated -0.0 into 0.0.
    sum_expenses(budget).trunc() + 0.0
}

pub fn print_accounts<W: Write>(accounts: &[Account], output: &mut W) -> io::Result<()> {
    writeln!(output, "Your Accounts")?;
    writeln!(output, "------------------------\n")?;
    for (idx, account) in accounts.iter().enumerate() {
        writeln!(
            output,
            "{}: {} ({}) {:.2}",
            idx,
            account.name(),
            account.display_name(),
            account.current_balance()
        )?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Zero-based, comma-separated account numbers. Repeated numbers collapse.
pub fn parse_account_indices(input: &str, count: usize) -> Result<BTreeSet<usize>, SelectionError> {
    input
        .split(',')
        .map(|part| {
            let part = part.trim();
            let index: usize = part
                .parse()
                .map_err(|_| SelectionError::InvalidIndex(part.to_string()))?;
            if index >= count {
                return Err(SelectionError::IndexOutOfRange { index, count });
            }
            Ok(index)
        })
        .collect()
}

pub fn parse_monthly_expenses(input: &str) -> Result<f64, SelectionError> {
    let input = input.trim();
    input
        .parse()
        .map_err(|_| SelectionError::InvalidExpenses(input.to_string()))
}
