//! Tenancy ledger
//!
//! Hash-linked record of who rented which unit:
//! - Content-hashed tenancy blocks
//! - Tamper-evident chain with chain-of-custody verification
//! - Field-level editor that simulates retroactive tampering
//! - Newest-first tenancy queries

pub mod block;
pub mod chain;
pub mod editor;
pub mod query;
pub mod record;
pub mod shared;

pub use block::{derive_hash, Block};
pub use chain::{BlockAudit, Chain, ChainAudit, ChainMetadata, ChainVerification};
pub use editor::{EditOutcome, EditRequest, FieldEdit, RecordField};
pub use query::TenancyHistory;
pub use record::{Record, Unit};
pub use shared::SharedChain;
