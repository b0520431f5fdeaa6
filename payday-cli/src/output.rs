//! Output formatting utilities

use chrono::NaiveDate;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use rust_decimal::Decimal;
use serde_json::{json, Value};

use payday_core::{Account, NumberedAccounts, SummaryReport};

/// Display format for due dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format an amount with the currency symbol and two decimals
pub fn format_money(symbol: &str, value: Decimal) -> String {
    format!("{} {:.2}", symbol, value.round_dp(2))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Table of numbered accounts with their status as of `today`
pub fn accounts_table(accounts: &NumberedAccounts, today: NaiveDate, symbol: &str) -> Table {
    let mut table = create_table();
    table.set_header(vec!["#", "ID", "Description", "Type", "Value", "Due Date", "Status"]);

    for (number, account) in accounts {
        table.add_row(vec![
            Cell::new(number),
            Cell::new(account.id()),
            Cell::new(account.description()),
            Cell::new(account.account_type()),
            Cell::new(format_money(symbol, account.value())),
            Cell::new(format_date(account.due_date())),
            Cell::new(account.status_on(today)),
        ]);
    }

    table
}

/// One-line summary used in pick lists: "1. Rent - $ 1500.00 (Due: 2025-01-31)"
pub fn account_line(number: usize, account: &Account, symbol: &str) -> String {
    format!(
        "{}. {} - {} (Due: {})",
        number,
        account.description(),
        format_money(symbol, account.value()),
        format_date(account.due_date())
    )
}

/// Detail block for a single account
pub fn account_details(account: &Account, status: &str, symbol: &str) -> Vec<String> {
    vec![
        format!("ID: {}", account.id()),
        format!("Description: {}", account.description()),
        format!("Value: {}", format_money(symbol, account.value())),
        format!("Due Date: {}", format_date(account.due_date())),
        format!("Type: {}", account.account_type()),
        format!("Status: {}", status),
    ]
}

/// Text rendering of the summary report
pub fn report_lines(report: &SummaryReport, symbol: &str) -> Vec<String> {
    vec![
        "=== Financial Summary ===".to_string(),
        format!("Total Payable: {}", format_money(symbol, report.total_payable)),
        format!("Total Receivable: {}", format_money(symbol, report.total_receivable)),
        format!("Net Balance: {}", format_money(symbol, report.net_balance)),
        String::new(),
        "--- Details ---".to_string(),
        format!("Pending Payables: {}", format_money(symbol, report.pending_payable)),
        format!("Pending Receivables: {}", format_money(symbol, report.pending_receivable)),
        format!("Overdue Payables: {}", format_money(symbol, report.overdue_payable)),
    ]
}

/// Overdue section shown after the report; empty when nothing is overdue
pub fn overdue_lines(overdue: &[Account], symbol: &str) -> Vec<String> {
    if overdue.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Overdue Accounts:".to_string()];
    for account in overdue {
        lines.push(format!(
            "- {}: {} (Expired on {})",
            account.description(),
            format_money(symbol, account.value()),
            format_date(account.due_date())
        ));
    }
    lines
}

/// JSON form of a numbered listing
pub fn accounts_json(accounts: &NumberedAccounts, today: NaiveDate) -> Vec<Value> {
    accounts
        .iter()
        .map(|(number, account)| {
            json!({
                "number": number,
                "id": account.id(),
                "description": account.description(),
                "type": account.account_type(),
                "value": account.value(),
                "due_date": format_date(account.due_date()),
                "status": account.status_on(today).to_string(),
            })
        })
        .collect()
}
