//! Clock port - source of "today"

use chrono::NaiveDate;

/// Supplies the current calendar date
///
/// Overdue status depends on the date at call time, so the ledger asks the
/// clock on every query instead of caching a date.
pub trait Clock: Send + Sync {
    /// Current calendar date
    fn today(&self) -> NaiveDate;
}
