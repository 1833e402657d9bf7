//! Monitoring for the tenancy ledger.
//!
//! - Structured logging via `tracing`

pub mod logging;

pub use logging::{init_logging, LogFormat};
