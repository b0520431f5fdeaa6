//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
mod filter;
mod token;
pub mod result;

pub use account::{Account, AccountStatus, AccountType};
pub use filter::AccountFilter;
pub use token::AccountToken;
