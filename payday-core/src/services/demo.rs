//! Demo service - bootstrap sample data
//!
//! Sample data lets a fresh session show something useful without typing
//! accounts in first. It goes through the normal add / mark-paid path, so it
//! obeys the same rules as user input.

use tracing::info;

use crate::adapters::demo::generate_demo_accounts;
use crate::domain::result::Result;
use crate::domain::{Account, AccountType};
use crate::services::LedgerService;

/// Demo service for loading the illustrative dataset
pub struct DemoService;

impl DemoService {
    /// Add the demo accounts to `ledger`, dated relative to its clock
    ///
    /// Returns the accounts as they stand after loading.
    pub fn populate(ledger: &mut LedgerService) -> Result<Vec<Account>> {
        let today = ledger.today();
        let mut loaded = Vec::new();

        for seed in generate_demo_accounts(today) {
            let mut account =
                ledger.add(seed.description, seed.value, seed.due_date, seed.account_type)?;
            if seed.paid {
                let id = account.id().to_string();
                account = match seed.account_type {
                    AccountType::Payable => ledger.mark_paid(&id)?,
                    AccountType::Receivable => ledger.mark_received(&id)?,
                };
            }
            loaded.push(account);
        }

        info!(count = loaded.len(), "demo data loaded");
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::adapters::clock::FixedClock;

    #[test]
    fn test_populate_marks_internet_paid() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
        let mut ledger = LedgerService::new(Arc::new(FixedClock::new(today)));

        let loaded = DemoService::populate(&mut ledger).unwrap();

        assert_eq!(ledger.len(), 3);
        let internet = loaded.iter().find(|a| a.description() == "Internet").unwrap();
        assert!(internet.is_paid());
        assert!(ledger.overdue().is_empty());
    }
}
