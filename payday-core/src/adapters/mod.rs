//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - System and fixed clocks for the Clock port
//! - Demo data provider for the illustrative bootstrap dataset

pub mod clock;
pub mod demo;
