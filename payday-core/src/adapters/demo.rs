//! Demo data provider
//!
//! Generates the small illustrative dataset used for onboarding and tests:
//! - a rent payable due in 30 days
//! - a salary receivable due in 5 days
//! - an internet bill that was due 10 days ago and is already paid

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::domain::AccountType;

/// One account to be created by the bootstrap
#[derive(Debug, Clone, PartialEq)]
pub struct DemoAccount {
    pub description: &'static str,
    pub value: Decimal,
    pub due_date: NaiveDate,
    pub account_type: AccountType,
    pub paid: bool,
}

/// Generate demo accounts with due dates relative to `today`
pub fn generate_demo_accounts(today: NaiveDate) -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            description: "Rent",
            value: Decimal::new(150000, 2), // 1,500.00
            due_date: today + Duration::days(30),
            account_type: AccountType::Payable,
            paid: false,
        },
        DemoAccount {
            description: "Salary",
            value: Decimal::new(500000, 2), // 5,000.00
            due_date: today + Duration::days(5),
            account_type: AccountType::Receivable,
            paid: false,
        },
        DemoAccount {
            description: "Internet",
            value: Decimal::new(12090, 2), // 120.90
            due_date: today - Duration::days(10),
            account_type: AccountType::Payable,
            paid: true,
        },
    ]
}
