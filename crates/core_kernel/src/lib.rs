//! Core Kernel - Foundational types for decoding Chargify payloads
//!
//! This crate provides the building blocks shared by every entity decoder:
//! - Money types converting cents-denominated integers to exact decimals
//! - A format-neutral field tree ([`Value`], [`Record`]) with XML and JSON adapters
//! - Lenient field decoders with documented defaults
//! - The [`Decode`] trait and the [`DecodeError`] taxonomy

pub mod money;
pub mod value;
pub mod xml;
pub mod json;
pub mod field;
pub mod decode;
pub mod error;

pub use money::{Money, Currency, cents_to_decimal};
pub use value::{Value, Record};
pub use field::{WireEnum, UNSET_DATE};
pub use decode::Decode;
pub use error::DecodeError;
