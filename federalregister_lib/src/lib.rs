//! Library layer for the Federal Register client: input validation, settings,
//! request pacing with retries, and executive-order aggregation.
//!
//! Wraps the `federalregister_api` crate, which owns query encoding and the
//! wire format.

pub mod aggregate;
pub mod client;
pub mod config;
pub mod error;
pub mod validation;

pub use federalregister_api;
pub use federalregister_api::types;
pub use federalregister_api::{DateRange, Query, SearchRequest};

pub use client::PacedClient;
pub use config::{RetryConfig, Settings, SettingsError};
pub use error::FederalRegisterError;
