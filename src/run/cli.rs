use anyhow::Result;
use rust_decimal::Decimal;
use std::io::Write;

use crate::controller::{AppState, Notice, View};
use crate::storage::KeyValueStore;
use crate::ui::util::format_amount;

pub(crate) fn as_cli<S: KeyValueStore>(args: &[String], store: S) -> Result<()> {
    let mut out = std::io::stdout().lock();
    run_command(args, store, &mut out)
}

fn run_command<S, W>(args: &[String], store: S, out: &mut W) -> Result<()>
where
    S: KeyValueStore,
    W: Write,
{
    let Some(command) = args.get(1) else {
        print_usage(out)?;
        return Ok(());
    };
    let rest = &args[2..];

    match command.as_str() {
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "piebudget {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        "register" => cli_register(rest, AppState::start(store)?, out),
        "login" => cli_login(rest, AppState::start(store)?, out),
        "logout" => cli_logout(AppState::start(store)?, out),
        "whoami" => cli_whoami(&AppState::start(store)?, out),
        "add" => cli_add(rest, AppState::start(store)?, out),
        "list" => cli_list(&AppState::start(store)?, out),
        "summary" | "s" => cli_summary(&AppState::start(store)?, out),
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "PieBudget — local budget tracker with a spending pie chart")?;
    writeln!(out)?;
    writeln!(out, "Usage: piebudget [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Launch interactive TUI")?;
    writeln!(out, "  register <user> <password>    Create a login")?;
    writeln!(out, "  login <user> <password>       Log in and remember the session")?;
    writeln!(out, "  logout                        Forget the session")?;
    writeln!(out, "  whoami                        Show the logged-in user")?;
    writeln!(out, "  add <amount> <category>       Record a transaction")?;
    writeln!(out, "  list                          List transactions in entry order")?;
    writeln!(out, "  summary                       Income and spending by category")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    writeln!(out)?;
    writeln!(
        out,
        "Data lives in the platform data directory; set {} to override.",
        crate::config::DATA_DIR_ENV
    )?;
    Ok(())
}

fn credentials_args(args: &[String], usage: &str) -> Result<(String, String)> {
    match args {
        [user, password] => Ok((user.clone(), password.clone())),
        _ => anyhow::bail!("Usage: {usage}"),
    }
}

fn cli_register<S: KeyValueStore, W: Write>(
    args: &[String],
    mut state: AppState<S>,
    out: &mut W,
) -> Result<()> {
    let (user, password) = credentials_args(args, "piebudget register <user> <password>")?;
    let notice = state.on_register_submit(&user, &password)?;
    writeln!(out, "{}", notice.message())?;
    Ok(())
}

fn cli_login<S: KeyValueStore, W: Write>(
    args: &[String],
    mut state: AppState<S>,
    out: &mut W,
) -> Result<()> {
    let (user, password) = credentials_args(args, "piebudget login <user> <password>")?;
    let notice = state.on_login_submit(&user, &password)?;
    writeln!(out, "{}", notice.message())?;
    Ok(())
}

fn cli_logout<S: KeyValueStore, W: Write>(mut state: AppState<S>, out: &mut W) -> Result<()> {
    let was = state.user().map(str::to_string);
    state.on_logout()?;
    match was {
        Some(user) => writeln!(out, "Logged out {user}.")?,
        None => writeln!(out, "Not logged in.")?,
    }
    Ok(())
}

fn cli_whoami<S: KeyValueStore, W: Write>(state: &AppState<S>, out: &mut W) -> Result<()> {
    match state.user() {
        Some(user) => writeln!(out, "{user}")?,
        None => writeln!(out, "Not logged in")?,
    }
    Ok(())
}

fn cli_add<S: KeyValueStore, W: Write>(
    args: &[String],
    mut state: AppState<S>,
    out: &mut W,
) -> Result<()> {
    let [amount, category @ ..] = args else {
        anyhow::bail!("Usage: piebudget add <amount> <category>");
    };
    let category = category.join(" ");

    if let Notice::TransactionAdded(txn) = state.on_add_transaction(amount, &category)? {
        writeln!(out, "Added {}", txn.display_line())?;
        writeln!(out, "Income: {}", format_amount(state.ledger().income()))?;
    }
    Ok(())
}

fn cli_list<S: KeyValueStore, W: Write>(state: &AppState<S>, out: &mut W) -> Result<()> {
    require_login(state)?;
    let transactions = state.ledger().list_transactions();
    if transactions.is_empty() {
        writeln!(out, "No transactions yet")?;
        return Ok(());
    }
    for (i, txn) in transactions.iter().enumerate() {
        writeln!(out, "{:>4}  {}", i + 1, txn.display_line())?;
    }
    Ok(())
}

fn cli_summary<S: KeyValueStore, W: Write>(state: &AppState<S>, out: &mut W) -> Result<()> {
    require_login(state)?;
    let ledger = state.ledger();

    writeln!(out, "PieBudget — {}", state.user().unwrap_or_default())?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(out, "  Income:     {}", format_amount(ledger.income()))?;
    writeln!(out, "  Total Txns: {}", ledger.len())?;
    writeln!(out)?;
    writeln!(out, "Spending Breakdown:")?;

    let income = ledger.income();
    for row in ledger.by_category() {
        if row.placeholder {
            writeln!(out, "  {}", row.label)?;
            continue;
        }
        let share = share_percent(row.total, income);
        writeln!(
            out,
            "  {:<24} {:>12} {:>6.1}%",
            row.label,
            format_amount(row.total),
            share
        )?;
    }
    Ok(())
}

/// `part` as a percentage of `whole`, dividing first so large totals
/// cannot overflow.
fn share_percent(part: Decimal, whole: Decimal) -> Decimal {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(Decimal::ZERO)
}

fn require_login<S: KeyValueStore>(state: &AppState<S>) -> Result<()> {
    if state.view() != View::LoggedIn {
        return Err(crate::error::Error::NotLoggedIn.into());
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
