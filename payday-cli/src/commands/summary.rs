//! Summary command - financial report

use std::io::{self, Write};

use anyhow::Result;
use serde_json::json;

use payday_core::PaydayContext;

use super::get_context;
use crate::config::Config;
use crate::output;

pub fn run(config: &Config, json: bool) -> Result<()> {
    let ctx = get_context(config)?;
    write_summary(&mut io::stdout(), &ctx, &config.currency, json)
}

pub fn write_summary<W: Write>(
    out: &mut W,
    ctx: &PaydayContext,
    symbol: &str,
    json: bool,
) -> Result<()> {
    let report = ctx.summary().full_report();
    let overdue = ctx.ledger.overdue();

    if json {
        let overdue_ids: Vec<_> = overdue.iter().map(|a| a.id()).collect();
        let body = json!({
            "report": report,
            "overdue": overdue_ids,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        return Ok(());
    }

    for line in output::report_lines(&report, symbol) {
        writeln!(out, "{}", line)?;
    }
    let overdue_lines = output::overdue_lines(&overdue, symbol);
    if !overdue_lines.is_empty() {
        writeln!(out)?;
        for line in overdue_lines {
            writeln!(out, "{}", line)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use payday_core::adapters::clock::FixedClock;
    use payday_core::AccountType;
    use rust_decimal::Decimal;
    use serde_json::Value;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
    }

    fn context() -> PaydayContext {
        let mut ctx = PaydayContext::new(Arc::new(FixedClock::new(today())), true).unwrap();
        ctx.ledger
            .add("Gym", Decimal::new(4999, 2), today().pred_opt().unwrap(), AccountType::Payable)
            .unwrap();
        ctx
    }

    fn render(ctx: &PaydayContext, json: bool) -> String {
        let mut out = Vec::new();
        write_summary(&mut out, ctx, "€", json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_summary() {
        let ctx = context();
        let body: Value = serde_json::from_str(&render(&ctx, true)).unwrap();

        let report = body["report"].as_object().unwrap();
        assert_eq!(report.len(), 6);
        assert_eq!(report["total_receivable"], "5000.00");
        assert_eq!(report["overdue_payable"], "49.99");

        let gym = ctx.ledger.overdue()[0].id().to_string();
        assert_eq!(body["overdue"], serde_json::json!([gym]));
    }

    #[test]
    fn test_text_summary() {
        let output = render(&context(), false);
        assert!(output.contains("Net Balance: € 3329.11"));
        assert!(output.contains("Overdue Accounts:"));
        assert!(output.contains("- Gym: € 49.99 (Expired on 2025-06-09)"));
    }
}
