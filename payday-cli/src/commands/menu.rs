//! Interactive menu - the default mode when no subcommand is given

use std::io;

use anyhow::Result;
use colored::Colorize;

use payday_core::{AccountToken, AccountType, PaydayContext};

use super::get_context;
use crate::config::Config;
use crate::input;
use crate::output;
use crate::prompt::{Console, LineConsole, TerminalConsole};

const MENU_OPTIONS: [&str; 7] = [
    "Add Account",
    "List Accounts",
    "Mark Payable as Paid",
    "Mark Receivable as Received",
    "Search by ID",
    "Financial Summary",
    "Exit",
];

pub fn run(config: &Config) -> Result<()> {
    let mut ctx = get_context(config)?;

    if atty::is(atty::Stream::Stdin) {
        run_menu(&mut ctx, &mut TerminalConsole, &config.currency)
    } else {
        let stdin = io::stdin();
        let mut console = LineConsole::new(stdin.lock(), io::stdout());
        run_menu(&mut ctx, &mut console, &config.currency)
    }
}

/// Menu loop. Ends on Exit or when the console runs out of input.
pub fn run_menu<C: Console>(ctx: &mut PaydayContext, console: &mut C, symbol: &str) -> Result<()> {
    let options: Vec<String> = MENU_OPTIONS.iter().map(|s| s.to_string()).collect();

    console.println(&"=== Payday ===".bold().to_string())?;
    loop {
        let Some(choice) = console.select("Main Menu", &options)? else {
            break;
        };
        match choice {
            0 => add_account(ctx, console)?,
            1 => list_accounts(ctx, console, symbol)?,
            2 => settle(ctx, console, symbol, AccountType::Payable)?,
            3 => settle(ctx, console, symbol, AccountType::Receivable)?,
            4 => search(ctx, console, symbol)?,
            5 => summary(ctx, console, symbol)?,
            _ => break,
        }
        console.println("")?;
    }
    console.println("Shutting Down...")
}

/// Prompt until `parse` accepts the answer; `None` once input runs out
fn ask<C, T, F>(console: &mut C, prompt: &str, parse: F) -> Result<Option<T>>
where
    C: Console,
    F: Fn(&str) -> Result<T>,
{
    loop {
        let Some(raw) = console.input(prompt)? else {
            return Ok(None);
        };
        match parse(&raw) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => console.println(&e.to_string().red().to_string())?,
        }
    }
}

fn add_account<C: Console>(ctx: &mut PaydayContext, console: &mut C) -> Result<()> {
    console.println(&"--- New Account ---".bold().to_string())?;

    let Some(description) = ask(console, "Description", input::parse_description)? else {
        return Ok(());
    };
    let Some(value) = ask(console, "Value", input::parse_amount)? else {
        return Ok(());
    };
    let Some(due_date) = ask(console, "Due date (YYYY-MM-DD)", input::parse_due_date)? else {
        return Ok(());
    };

    let types = [AccountType::Payable, AccountType::Receivable];
    let labels: Vec<String> = types.iter().map(|t| t.label().to_string()).collect();
    let Some(index) = console.select("Type", &labels)? else {
        return Ok(());
    };

    match ctx.ledger.add(&description, value, due_date, types[index]) {
        Ok(account) => {
            let msg = format!("Account added! ID: {}", account.id());
            console.println(&msg.green().to_string())
        }
        Err(e) => console.println(&e.to_string().red().to_string()),
    }
}

fn list_accounts<C: Console>(ctx: &PaydayContext, console: &mut C, symbol: &str) -> Result<()> {
    let accounts = ctx.ledger.numbered_all();
    if accounts.is_empty() {
        return console.println("No Accounts Registered");
    }

    let table = output::accounts_table(&accounts, ctx.ledger.today(), symbol);
    console.println(&table.to_string())
}

fn settle<C: Console>(
    ctx: &mut PaydayContext,
    console: &mut C,
    symbol: &str,
    account_type: AccountType,
) -> Result<()> {
    let (pending, noun, verb) = match account_type {
        AccountType::Payable => (ctx.ledger.numbered_pending_payables(), "payable", "paid"),
        AccountType::Receivable => (
            ctx.ledger.numbered_pending_receivables(),
            "receivable",
            "received",
        ),
    };

    if pending.is_empty() {
        return console.println(&format!("No pending {}s.", noun));
    }

    console.println(&format!("Pending {}s:", noun).bold().to_string())?;
    for (number, account) in &pending {
        console.println(&output::account_line(*number, account, symbol))?;
    }

    let prompt = format!("Type the {} NUMBER or ID to mark as {}", noun, verb);
    let Some(token) = ask(console, &prompt, |raw| {
        input::parse_choice(raw, pending.keys().copied())
    })?
    else {
        return Ok(());
    };

    let result = match account_type {
        AccountType::Payable => ctx.ledger.mark_paid(&token),
        AccountType::Receivable => ctx.ledger.mark_received(&token),
    };
    match result {
        Ok(account) => {
            let msg = format!("'{}' marked as {}!", account.description(), verb);
            console.println(&msg.green().to_string())
        }
        Err(e) => console.println(&e.to_string().red().to_string()),
    }
}

fn search<C: Console>(ctx: &PaydayContext, console: &mut C, symbol: &str) -> Result<()> {
    let Some(token) = ask(console, "Type the account NUMBER or ID", |raw| {
        Ok(AccountToken::parse(raw).map(|_| raw.trim().to_string())?)
    })?
    else {
        return Ok(());
    };

    match ctx.ledger.find_by_identifier(&token)? {
        Some(account) => {
            let status = ctx.ledger.status(account.id());
            console.println(&"--- Account Details ---".bold().to_string())?;
            for line in output::account_details(&account, &status, symbol) {
                console.println(&line)?;
            }
            Ok(())
        }
        None => console.println(&"Account not found!".red().to_string()),
    }
}

fn summary<C: Console>(ctx: &PaydayContext, console: &mut C, symbol: &str) -> Result<()> {
    let report = ctx.summary().full_report();
    for line in output::report_lines(&report, symbol) {
        console.println(&line)?;
    }

    let overdue = output::overdue_lines(&ctx.ledger.overdue(), symbol);
    if !overdue.is_empty() {
        console.println("")?;
        for line in overdue {
            console.println(&line.red().to_string())?;
        }
    }
    Ok(())
}
