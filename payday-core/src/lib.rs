//! Payday Core - Business logic for a payables/receivables ledger
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Account, tokens, filters, errors)
//! - **ports**: Trait definitions for external dependencies (Clock)
//! - **services**: Business logic orchestration (ledger store, summaries)
//! - **adapters**: Concrete implementations (system clock, demo data)
//!
//! Everything lives in memory for the lifetime of the process. A single
//! caller drives the ledger; the summary service only borrows it.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

use std::sync::Arc;

use adapters::clock::SystemClock;
use ports::Clock;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Account, AccountFilter, AccountStatus, AccountToken, AccountType};
pub use services::{LedgerService, NumberedAccounts, SummaryReport, SummaryService};

/// Main context for Payday operations
///
/// Owns the ledger. Summaries borrow it on demand, so they always see the
/// current state.
pub struct PaydayContext {
    pub ledger: LedgerService,
}

impl PaydayContext {
    /// Create a context with the given clock, optionally loading demo data
    pub fn new(clock: Arc<dyn Clock>, sample_data: bool) -> Result<Self> {
        let mut ledger = LedgerService::new(clock);
        if sample_data {
            DemoService::populate(&mut ledger)?;
        }
        Ok(Self { ledger })
    }

    /// Create a context on the local wall clock
    pub fn with_system_clock(sample_data: bool) -> Result<Self> {
        Self::new(Arc::new(SystemClock), sample_data)
    }

    /// Summary view over the current ledger
    pub fn summary(&self) -> SummaryService<'_> {
        SummaryService::new(&self.ledger)
    }
}
