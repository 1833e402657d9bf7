//! # Tenancy Ledger
//!
//! An append-only, hash-linked ledger of rental tenancies:
//! - **Ledger**: blocks, chain, chain-of-custody verification
//! - **Editor**: in-place record rewrites that leave hashes stale, so that
//!   tampering shows up on the next verification
//! - **Queries**: newest-first tenancy lookups
//!
//! ## Quick Start
//!
//! ```rust
//! use tenancy_ledger::ledger::{Chain, EditRequest, Record, RecordField, Unit};
//!
//! let mut chain = Chain::new().unwrap();
//! chain.append(Record::new("Helen", "Female", "", "", Unit::named("The Gables"))).unwrap();
//! chain.append(Record::new("Nok", "Male", "", "", Unit::named("The Gables"))).unwrap();
//! assert_eq!(chain.latest_tenant_of("The Gables"), Some("Nok"));
//!
//! chain.append(Record::new("Linda", "Female", "", "", Unit::named("Hillside"))).unwrap();
//! chain.edit(2, EditRequest::field(RecordField::Name, "Nok")).unwrap();
//! assert_eq!(chain.verify().unwrap().broken_at, Some(3));
//! ```
//!
//! Known limitation: a block's own recorded hash is never checked against
//! its content, so editing the newest block goes unnoticed until another
//! block is appended after it.

pub mod catalog;
pub mod config;
pub mod core;
pub mod ledger;
pub mod monitoring;
pub mod presenter;

pub use crate::core::error::{Error, Result};
