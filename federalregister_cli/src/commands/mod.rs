//! CLI subcommand implementations.

pub mod document;
pub mod executive_orders;
pub mod search;
