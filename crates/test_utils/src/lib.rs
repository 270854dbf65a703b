//! Test Utilities Crate
//!
//! Provides shared test infrastructure for the billing preview test suite.
//!
//! # Modules
//!
//! - `fixtures`: Recorded provider payloads in both wire formats
//! - `builders`: Payload builders rendering the same data as XML and JSON
//! - `assertions`: Custom assertion helpers for amounts
//! - `generators`: Property-based payload generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
