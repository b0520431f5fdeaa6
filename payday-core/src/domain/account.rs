//! Account domain model

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::result::{Error, Result};

/// Direction of an obligation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Money owed to a third party
    Payable,
    /// Money owed by a third party
    Receivable,
}

impl AccountType {
    /// Short label used in menus ("Pay" / "Receive")
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Payable => "Pay",
            AccountType::Receivable => "Receive",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Payable => f.write_str("Payable"),
            AccountType::Receivable => f.write_str("Receivable"),
        }
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "1" | "pay" | "payable" => Ok(AccountType::Payable),
            "2" | "receive" | "receivable" => Ok(AccountType::Receivable),
            other => Err(Error::validation(format!("Unknown account type: {}", other))),
        }
    }
}

/// Status derived from the paid flag and due date; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AccountStatus {
    Paid,
    Overdue,
    Pending,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountStatus::Paid => f.write_str("Paid"),
            AccountStatus::Overdue => f.write_str("Overdue"),
            AccountStatus::Pending => f.write_str("Pending"),
        }
    }
}

/// A payable or receivable obligation tracked by the ledger
///
/// Everything except the paid flag is fixed at creation. Instances handed out
/// by the ledger are copies, so changing one never touches the stored record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    id: Uuid,
    description: String,
    value: Decimal,
    due_date: NaiveDate,
    account_type: AccountType,
    paid: bool,
}

impl Account {
    /// Create a new unpaid account with a fresh id
    ///
    /// Input must already have passed [`Account::validate_input`].
    pub(crate) fn new(
        description: impl Into<String>,
        value: Decimal,
        due_date: NaiveDate,
        account_type: AccountType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            value,
            due_date,
            account_type,
            paid: false,
        }
    }

    /// Validate creation input
    pub fn validate_input(description: &str, value: Decimal) -> Result<()> {
        if value <= Decimal::ZERO {
            return Err(Error::validation("Value must be positive."));
        }
        if description.trim().is_empty() {
            return Err(Error::validation("Description can't be empty."));
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    /// Unpaid and due strictly before `today`
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        !self.paid && self.due_date < today
    }

    /// Derived status as of `today`
    pub fn status_on(&self, today: NaiveDate) -> AccountStatus {
        if self.paid {
            AccountStatus::Paid
        } else if self.due_date < today {
            AccountStatus::Overdue
        } else {
            AccountStatus::Pending
        }
    }

    /// Set the paid flag; paid accounts cannot go back to unpaid
    pub(crate) fn set_paid(&mut self, paid: bool) -> Result<()> {
        if self.paid && !paid {
            return Err(Error::invalid_state("Account already paid!"));
        }
        self.paid = paid;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rent() -> Account {
        Account::new("Rent", Decimal::new(150000, 2), date(2025, 3, 10), AccountType::Payable)
    }

    #[test]
    fn test_new_account_is_unpaid() {
        let account = rent();
        assert!(!account.is_paid());
        assert_eq!(account.description(), "Rent");
        assert_eq!(account.value(), Decimal::new(150000, 2));
        assert_eq!(account.account_type(), AccountType::Payable);
    }

    #[test]
    fn test_validate_input() {
        assert!(Account::validate_input("Rent", Decimal::new(1, 2)).is_ok());
        assert!(Account::validate_input("Rent", Decimal::ZERO).is_err());
        assert!(Account::validate_input("Rent", Decimal::new(-500, 2)).is_err());
        assert!(Account::validate_input("", Decimal::ONE).is_err());
        assert!(Account::validate_input(" \t\n", Decimal::ONE).is_err());
    }

    #[test]
    fn test_status_on() {
        let mut account = rent();
        assert_eq!(account.status_on(date(2025, 3, 10)), AccountStatus::Pending);
        assert_eq!(account.status_on(date(2025, 3, 11)), AccountStatus::Overdue);
        assert!(account.is_overdue_on(date(2025, 3, 11)));

        account.set_paid(true).unwrap();
        assert_eq!(account.status_on(date(2025, 3, 11)), AccountStatus::Paid);
        assert!(!account.is_overdue_on(date(2025, 3, 11)));
    }

    #[test]
    fn test_set_paid_is_forward_only() {
        let mut account = rent();
        account.set_paid(true).unwrap();
        // paying again is fine
        account.set_paid(true).unwrap();

        let err = account.set_paid(false).unwrap_err();
        assert!(matches!(err, Error::InvalidStateTransition(_)));
        assert!(account.is_paid());
    }

    #[test]
    fn test_unpaid_to_unpaid_is_allowed() {
        let mut account = rent();
        assert!(account.set_paid(false).is_ok());
        assert!(!account.is_paid());
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!("1".parse::<AccountType>().unwrap(), AccountType::Payable);
        assert_eq!("Receive".parse::<AccountType>().unwrap(), AccountType::Receivable);
        assert_eq!(" PAYABLE ".parse::<AccountType>().unwrap(), AccountType::Payable);
        assert!("3".parse::<AccountType>().is_err());
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(AccountType::Payable.to_string(), "Payable");
        assert_eq!(AccountType::Receivable.label(), "Receive");
        assert_eq!(AccountStatus::Overdue.to_string(), "Overdue");
    }
}
