//! Parsing of free-text answers typed at the menu prompts

use anyhow::{bail, Result};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use payday_core::AccountToken;

use crate::output::DATE_FORMAT;

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("amount pattern is valid"));

/// Non-empty description, trimmed
pub fn parse_description(raw: &str) -> Result<String> {
    let description = raw.trim();
    if description.is_empty() {
        bail!("Description can't be empty.");
    }
    Ok(description.to_string())
}

/// Positive amount written as plain digits with an optional decimal part
pub fn parse_amount(raw: &str) -> Result<Decimal> {
    let raw = raw.trim();
    if !AMOUNT_RE.is_match(raw) {
        bail!("Invalid value! Use only numbers (e.g. 150.50).");
    }
    let value: Decimal = match raw.parse() {
        Ok(value) => value,
        Err(_) => bail!("Invalid value! Use only numbers (e.g. 150.50)."),
    };
    if value <= Decimal::ZERO {
        bail!("Value must be positive.");
    }
    Ok(value)
}

/// Calendar date in YYYY-MM-DD form
pub fn parse_due_date(raw: &str) -> Result<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(_) => bail!("Invalid date! Use the YYYY-MM-DD format."),
    }
}

/// Token typed at a pick list. Sequence numbers must be one of `offered`;
/// ids are passed through for the ledger to resolve.
pub fn parse_choice<I>(raw: &str, offered: I) -> Result<String>
where
    I: IntoIterator<Item = usize>,
{
    let token = AccountToken::parse(raw)?;
    if let AccountToken::SequenceNumber(_) = token {
        let in_view = token
            .sequence_key()
            .map(|key| offered.into_iter().any(|n| n == key))
            .unwrap_or(false);
        if !in_view {
            bail!("Invalid number!");
        }
    }
    Ok(raw.trim().to_string())
}
