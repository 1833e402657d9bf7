//! Core utilities and common types for the tenancy ledger.

pub mod digest;
pub mod error;
pub mod types;

pub use digest::sha3_256_multi;
pub use error::{Error, Result};
pub use types::*;
