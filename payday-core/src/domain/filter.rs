//! Account predicates used by list queries and numbered views

use chrono::NaiveDate;

use super::account::{Account, AccountType};

/// Selects a subset of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountFilter {
    All,
    ByType(AccountType),
    Pending,
    PendingByType(AccountType),
    Paid,
    PaidByType(AccountType),
    /// Unpaid and past due as of the evaluation date
    Overdue,
}

impl AccountFilter {
    /// Test one account; `today` only matters for [`AccountFilter::Overdue`]
    pub fn matches(&self, account: &Account, today: NaiveDate) -> bool {
        match self {
            AccountFilter::All => true,
            AccountFilter::ByType(t) => account.account_type() == *t,
            AccountFilter::Pending => !account.is_paid(),
            AccountFilter::PendingByType(t) => !account.is_paid() && account.account_type() == *t,
            AccountFilter::Paid => account.is_paid(),
            AccountFilter::PaidByType(t) => account.is_paid() && account.account_type() == *t,
            AccountFilter::Overdue => account.is_overdue_on(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn account(account_type: AccountType, due: NaiveDate, paid: bool) -> Account {
        let mut account = Account::new("x", Decimal::ONE, due, account_type);
        account.set_paid(paid).unwrap();
        account
    }

    #[test]
    fn test_type_and_payment_filters() {
        let paid_payable = account(AccountType::Payable, today(), true);
        let open_receivable = account(AccountType::Receivable, today(), false);

        assert!(AccountFilter::All.matches(&paid_payable, today()));
        assert!(AccountFilter::Paid.matches(&paid_payable, today()));
        assert!(AccountFilter::PaidByType(AccountType::Payable).matches(&paid_payable, today()));
        assert!(!AccountFilter::PaidByType(AccountType::Receivable).matches(&paid_payable, today()));
        assert!(!AccountFilter::Pending.matches(&paid_payable, today()));

        assert!(AccountFilter::PendingByType(AccountType::Receivable).matches(&open_receivable, today()));
        assert!(!AccountFilter::PendingByType(AccountType::Payable).matches(&open_receivable, today()));
        assert!(AccountFilter::ByType(AccountType::Receivable).matches(&open_receivable, today()));
    }

    #[test]
    fn test_overdue_filter_uses_evaluation_date() {
        let due = today();
        let open = account(AccountType::Payable, due, false);
        assert!(!AccountFilter::Overdue.matches(&open, today()));
        assert!(AccountFilter::Overdue.matches(&open, today().succ_opt().unwrap()));

        let settled = account(AccountType::Payable, due, true);
        assert!(!AccountFilter::Overdue.matches(&settled, today().succ_opt().unwrap()));
    }
}
