//! Summary service - aggregate figures over the ledger
//!
//! Read-only: every figure is computed from the ledger at call time, so a
//! change between two calls shows up in the second one.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Account, AccountFilter, AccountType};
use crate::services::LedgerService;

/// Summary service for totals and balances
pub struct SummaryService<'a> {
    ledger: &'a LedgerService,
}

impl<'a> SummaryService<'a> {
    pub fn new(ledger: &'a LedgerService) -> Self {
        Self { ledger }
    }

    /// Sum of all accounts of a type, paid or not
    pub fn total_by_type(&self, account_type: AccountType) -> Decimal {
        sum(&self.ledger.by_type(account_type))
    }

    pub fn total_payable(&self) -> Decimal {
        self.total_by_type(AccountType::Payable)
    }

    pub fn total_receivable(&self) -> Decimal {
        self.total_by_type(AccountType::Receivable)
    }

    /// Receivables minus payables
    pub fn net_balance(&self) -> Decimal {
        self.total_receivable() - self.total_payable()
    }

    /// Sum of unpaid accounts of a type (overdue ones included)
    pub fn pending_total_by_type(&self, account_type: AccountType) -> Decimal {
        sum(&self.ledger.filter(AccountFilter::PendingByType(account_type)))
    }

    /// Sum of unpaid, past-due accounts of a type
    pub fn overdue_total_by_type(&self, account_type: AccountType) -> Decimal {
        let overdue: Vec<Account> = self
            .ledger
            .overdue()
            .into_iter()
            .filter(|a| a.account_type() == account_type)
            .collect();
        sum(&overdue)
    }

    /// Full report
    ///
    /// Carries overdue payables only; there is no overdue-receivables line.
    pub fn full_report(&self) -> SummaryReport {
        SummaryReport {
            total_payable: self.total_payable(),
            total_receivable: self.total_receivable(),
            net_balance: self.net_balance(),
            pending_payable: self.pending_total_by_type(AccountType::Payable),
            pending_receivable: self.pending_total_by_type(AccountType::Receivable),
            overdue_payable: self.overdue_total_by_type(AccountType::Payable),
        }
    }
}

/// Cannot overflow: `LedgerService::add` keeps each type's total within range
fn sum(accounts: &[Account]) -> Decimal {
    accounts.iter().map(Account::value).sum()
}

/// Aggregate figures for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub total_payable: Decimal,
    pub total_receivable: Decimal,
    pub net_balance: Decimal,
    pub pending_payable: Decimal,
    pub pending_receivable: Decimal,
    pub overdue_payable: Decimal,
}
