//! Ledger service - the authoritative account store
//!
//! Owns every [`Account`] and is the only path for creating accounts and
//! marking them paid. Queries hand out copies, never references into the
//! collection.
//!
//! Numbered views are recomputed on every call: the number of an account
//! depends on which filter is applied and on what has been added since, so it
//! is never stored.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, AccountFilter, AccountStatus, AccountToken, AccountType};
use crate::ports::Clock;

/// 1-based sequence number -> account, in insertion order
pub type NumberedAccounts = BTreeMap<usize, Account>;

/// Label returned by [`LedgerService::status`] for unknown ids
pub const STATUS_NOT_FOUND: &str = "Account not found";

/// In-memory ledger of payables and receivables
pub struct LedgerService {
    accounts: Vec<Account>,
    clock: Arc<dyn Clock>,
}

impl LedgerService {
    /// Create an empty ledger
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            accounts: Vec::new(),
            clock,
        }
    }

    /// Current date according to the ledger's clock
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    // === Commands ===

    /// Add a new unpaid account
    ///
    /// Rejects a non-positive value, a blank description, or a value that
    /// would push the total for its type past `Decimal::MAX`, without
    /// touching the ledger. The description is stored as given.
    pub fn add(
        &mut self,
        description: &str,
        value: Decimal,
        due_date: NaiveDate,
        account_type: AccountType,
    ) -> Result<Account> {
        if let Err(e) = Account::validate_input(description, value)
            .and_then(|()| self.check_capacity(value, account_type))
        {
            warn!(error = %e, "rejected new account");
            return Err(e);
        }

        let account = Account::new(description, value, due_date, account_type);
        info!(account_id = %account.id(), %account_type, %due_date, "account added");
        self.accounts.push(account.clone());
        Ok(account)
    }

    /// Mark a payable as paid
    ///
    /// A numeric token indexes the pending-payables view; a UUID token marks
    /// that account whatever its type.
    pub fn mark_paid(&mut self, token: &str) -> Result<Account> {
        self.settle(token, AccountType::Payable)
    }

    /// Mark a receivable as received
    ///
    /// A numeric token indexes the pending-receivables view; a UUID token
    /// marks that account whatever its type.
    pub fn mark_received(&mut self, token: &str) -> Result<Account> {
        self.settle(token, AccountType::Receivable)
    }

    fn settle(&mut self, raw: &str, account_type: AccountType) -> Result<Account> {
        let token = AccountToken::parse(raw)?;
        let index = self
            .resolve_index(&token, AccountFilter::PendingByType(account_type))
            .ok_or_else(|| Error::not_found(format!("no {} account for {}", account_type, token)))?;

        let account = &mut self.accounts[index];
        if account.is_paid() {
            debug!(account_id = %account.id(), "account already settled");
            return Ok(account.clone());
        }

        account.set_paid(true)?;
        info!(account_id = %account.id(), %account_type, "account settled");
        Ok(account.clone())
    }

    // === Queries ===

    /// Snapshot of every account in insertion order
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts.clone()
    }

    /// Accounts matching `filter`, in insertion order
    pub fn filter(&self, filter: AccountFilter) -> Vec<Account> {
        let today = self.today();
        self.accounts
            .iter()
            .filter(|a| filter.matches(a, today))
            .cloned()
            .collect()
    }

    pub fn by_type(&self, account_type: AccountType) -> Vec<Account> {
        self.filter(AccountFilter::ByType(account_type))
    }

    /// Unpaid accounts, overdue or not
    pub fn pending(&self) -> Vec<Account> {
        self.filter(AccountFilter::Pending)
    }

    pub fn paid(&self) -> Vec<Account> {
        self.filter(AccountFilter::Paid)
    }

    /// Unpaid accounts due before today (read from the clock now)
    pub fn overdue(&self) -> Vec<Account> {
        self.filter(AccountFilter::Overdue)
    }

    pub fn get_by_id(&self, id: Uuid) -> Option<Account> {
        self.accounts.iter().find(|a| a.id() == id).cloned()
    }

    /// Resolve a sequence number (full listing) or UUID
    ///
    /// Returns `Ok(None)` when the token is well-formed but names nothing.
    pub fn find_by_identifier(&self, token: &str) -> Result<Option<Account>> {
        let token = AccountToken::parse(token)?;
        let found = self
            .resolve_index(&token, AccountFilter::All)
            .map(|i| self.accounts[i].clone());
        debug!(%token, found = found.is_some(), "resolved account token");
        Ok(found)
    }

    // === Numbered views ===

    /// Number the accounts matching `filter` from 1
    pub fn numbered(&self, filter: AccountFilter) -> NumberedAccounts {
        let today = self.today();
        self.numbered_by(|a| filter.matches(a, today))
    }

    /// Number the accounts accepted by `predicate` from 1
    pub fn numbered_by<F>(&self, predicate: F) -> NumberedAccounts
    where
        F: Fn(&Account) -> bool,
    {
        self.accounts
            .iter()
            .filter(|&a| predicate(a))
            .cloned()
            .enumerate()
            .map(|(i, a)| (i + 1, a))
            .collect()
    }

    pub fn numbered_all(&self) -> NumberedAccounts {
        self.numbered(AccountFilter::All)
    }

    pub fn numbered_by_type(&self, account_type: AccountType) -> NumberedAccounts {
        self.numbered(AccountFilter::ByType(account_type))
    }

    pub fn numbered_pending(&self) -> NumberedAccounts {
        self.numbered(AccountFilter::Pending)
    }

    pub fn numbered_pending_payables(&self) -> NumberedAccounts {
        self.numbered(AccountFilter::PendingByType(AccountType::Payable))
    }

    pub fn numbered_pending_receivables(&self) -> NumberedAccounts {
        self.numbered(AccountFilter::PendingByType(AccountType::Receivable))
    }

    pub fn numbered_paid(&self) -> NumberedAccounts {
        self.numbered(AccountFilter::Paid)
    }

    pub fn numbered_paid_payables(&self) -> NumberedAccounts {
        self.numbered(AccountFilter::PaidByType(AccountType::Payable))
    }

    pub fn numbered_paid_receivables(&self) -> NumberedAccounts {
        self.numbered(AccountFilter::PaidByType(AccountType::Receivable))
    }

    // === Status ===

    /// Derived status of an account as of today
    pub fn account_status(&self, id: Uuid) -> Option<AccountStatus> {
        let today = self.today();
        self.accounts
            .iter()
            .find(|a| a.id() == id)
            .map(|a| a.status_on(today))
    }

    /// Status label: "Paid", "Overdue", "Pending" or "Account not found"
    pub fn status(&self, id: Uuid) -> String {
        self.account_status(id)
            .map(|s| s.to_string())
            .unwrap_or_else(|| STATUS_NOT_FOUND.to_string())
    }

    /// Every per-type total (and so every subset of one) must stay
    /// representable for the summary sums
    fn check_capacity(&self, value: Decimal, account_type: AccountType) -> Result<()> {
        let total = self
            .accounts
            .iter()
            .filter(|a| a.account_type() == account_type)
            .try_fold(value, |acc, a| acc.checked_add(a.value()));
        match total {
            Some(_) => Ok(()),
            None => Err(Error::validation(format!(
                "Value too large: {} total would exceed {}",
                account_type,
                Decimal::MAX
            ))),
        }
    }

    /// Index into the collection for a token; sequence numbers count within `scope`
    fn resolve_index(&self, token: &AccountToken, scope: AccountFilter) -> Option<usize> {
        match token {
            AccountToken::AccountId(id) => self.accounts.iter().position(|a| a.id() == *id),
            AccountToken::SequenceNumber(_) => {
                let key = token.sequence_key()?;
                let today = self.today();
                self.accounts
                    .iter()
                    .enumerate()
                    .filter(|(_, a)| scope.matches(a, today))
                    .nth(key - 1)
                    .map(|(i, _)| i)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::clock::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
    }

    fn ledger() -> LedgerService {
        LedgerService::new(Arc::new(FixedClock::new(today())))
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_and_get_by_id() {
        let mut ledger = ledger();
        let added = ledger
            .add("Rent", dec("1500.00"), today(), AccountType::Payable)
            .unwrap();

        let fetched = ledger.get_by_id(added.id()).unwrap();
        assert_eq!(fetched, added);
        assert!(!fetched.is_paid());
    }

    #[test]
    fn test_add_rejects_bad_input_without_mutation() {
        let mut ledger = ledger();
        assert!(matches!(
            ledger.add("Rent", Decimal::ZERO, today(), AccountType::Payable),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            ledger.add("   ", Decimal::ONE, today(), AccountType::Payable),
            Err(Error::Validation(_))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_value_overflowing_type_total() {
        let mut ledger = ledger();
        ledger.add("Big", Decimal::MAX, today(), AccountType::Payable).unwrap();

        let err = ledger
            .add("Bigger", Decimal::MAX, today(), AccountType::Payable)
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(matches!(
            ledger.add("Cent", dec("0.01"), today(), AccountType::Payable),
            Err(Error::Validation(_))
        ));
        assert_eq!(ledger.len(), 1);

        // The other type has its own headroom
        ledger
            .add("Income", Decimal::MAX, today(), AccountType::Receivable)
            .unwrap();
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut ledger = ledger();
        ledger.add("Rent", Decimal::ONE, today(), AccountType::Payable).unwrap();

        let mut snapshot = ledger.accounts();
        snapshot.clear();
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_resolve_index_skips_out_of_scope_accounts() {
        let mut ledger = ledger();
        ledger.add("A", Decimal::ONE, today(), AccountType::Payable).unwrap();
        let b = ledger.add("B", Decimal::ONE, today(), AccountType::Receivable).unwrap();

        let scope = AccountFilter::PendingByType(AccountType::Receivable);
        let index = ledger.resolve_index(&AccountToken::SequenceNumber(1), scope);
        assert_eq!(index, Some(1));
        assert_eq!(ledger.accounts[1].id(), b.id());
        assert_eq!(ledger.resolve_index(&AccountToken::SequenceNumber(2), scope), None);
        assert_eq!(ledger.resolve_index(&AccountToken::SequenceNumber(0), scope), None);
    }

    #[test]
    fn test_status_labels() {
        let mut ledger = ledger();
        let account = ledger
            .add("Rent", Decimal::ONE, today(), AccountType::Payable)
            .unwrap();

        assert_eq!(ledger.status(account.id()), "Pending");
        assert_eq!(ledger.status(Uuid::new_v4()), STATUS_NOT_FOUND);
    }
}
