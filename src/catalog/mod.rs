//! Reference data: rentable units and the seed tenant feed.
//!
//! Plain data passed into [`Chain::with_records`](crate::ledger::Chain::with_records).

pub mod seed;
pub mod units;

pub use seed::seed_records;
pub use units::Catalog;
