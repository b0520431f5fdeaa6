//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod demo;
mod ledger;
mod summary;

pub use demo::DemoService;
pub use ledger::{LedgerService, NumberedAccounts, STATUS_NOT_FOUND};
pub use summary::{SummaryReport, SummaryService};
