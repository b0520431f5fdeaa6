//! CLI command implementations

pub mod list;
pub mod menu;
pub mod summary;

use anyhow::{Context, Result};
use payday_core::PaydayContext;

use crate::config::Config;

/// Build the in-memory context for this process
pub fn get_context(config: &Config) -> Result<PaydayContext> {
    PaydayContext::with_system_clock(config.sample_data).context("Failed to load sample data")
}
