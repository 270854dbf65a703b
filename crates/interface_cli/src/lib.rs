//! Command line layer
//!
//! Backs the `preview-inspect` binary: configuration loading and the
//! decode-and-render step, kept out of `main` so it can be tested.

pub mod config;
pub mod inspect;

pub use config::InspectConfig;
pub use inspect::{detect_format, inspect, EntityKind, InspectError, Inspection, PayloadFormat};
