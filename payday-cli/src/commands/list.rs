//! List command - print accounts with their status

use std::io::{self, Write};

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;

use payday_core::{AccountFilter, AccountType, PaydayContext};

use super::get_context;
use crate::config::Config;
use crate::output;

/// Which accounts to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    All,
    Pending,
    Paid,
    Overdue,
    Payables,
    Receivables,
}

impl From<View> for AccountFilter {
    fn from(view: View) -> Self {
        match view {
            View::All => AccountFilter::All,
            View::Pending => AccountFilter::Pending,
            View::Paid => AccountFilter::Paid,
            View::Overdue => AccountFilter::Overdue,
            View::Payables => AccountFilter::ByType(AccountType::Payable),
            View::Receivables => AccountFilter::ByType(AccountType::Receivable),
        }
    }
}

pub fn run(config: &Config, view: View, json: bool) -> Result<()> {
    let ctx = get_context(config)?;
    write_list(&mut io::stdout(), &ctx, &config.currency, view, json)
}

pub fn write_list<W: Write>(
    out: &mut W,
    ctx: &PaydayContext,
    symbol: &str,
    view: View,
    json: bool,
) -> Result<()> {
    let today = ctx.ledger.today();
    let accounts = ctx.ledger.numbered(view.into());

    if json {
        let rows = output::accounts_json(&accounts, today);
        writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        return Ok(());
    }

    if accounts.is_empty() {
        writeln!(out, "No Accounts Registered")?;
        return Ok(());
    }

    writeln!(out, "{}", "Accounts".bold())?;
    writeln!(out)?;
    writeln!(out, "{}", output::accounts_table(&accounts, today, symbol))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use payday_core::adapters::clock::FixedClock;
    use serde_json::Value;

    use super::*;

    fn context(sample_data: bool) -> PaydayContext {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        PaydayContext::new(Arc::new(FixedClock::new(today)), sample_data).unwrap()
    }

    fn render(ctx: &PaydayContext, view: View, json: bool) -> String {
        let mut out = Vec::new();
        write_list(&mut out, ctx, "$", view, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_view_maps_to_filter() {
        assert_eq!(AccountFilter::from(View::All), AccountFilter::All);
        assert_eq!(AccountFilter::from(View::Overdue), AccountFilter::Overdue);
        assert_eq!(
            AccountFilter::from(View::Receivables),
            AccountFilter::ByType(AccountType::Receivable)
        );
    }

    #[test]
    fn test_json_listing_is_numbered_within_view() {
        let ctx = context(true);
        let rows: Vec<Value> = serde_json::from_str(&render(&ctx, View::Payables, true)).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["number"], 1);
        assert_eq!(rows[0]["description"], "Rent");
        assert_eq!(rows[1]["number"], 2);
        assert_eq!(rows[1]["description"], "Internet");
        assert_eq!(rows[1]["status"], "Paid");
        assert_eq!(rows[1]["due_date"], "2025-05-31");
    }

    #[test]
    fn test_table_listing() {
        let output = render(&context(true), View::Pending, false);
        assert!(output.contains("Accounts"));
        assert!(output.contains("Rent"));
        assert!(output.contains("Salary"));
        assert!(!output.contains("Internet"));
    }

    #[test]
    fn test_empty_listing() {
        assert!(render(&context(false), View::All, false).contains("No Accounts Registered"));
        assert_eq!(render(&context(false), View::All, true).trim(), "[]");
    }
}
