//! Read-only tenancy queries.
//!
//! Every scan walks the chain newest to oldest, so the most recent tenancy
//! of a unit wins.

use crate::ledger::chain::Chain;
use crate::ledger::record::Record;
use serde::Serialize;

/// Every tenancy of one unit, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TenancyHistory<'a> {
    /// Queried unit name
    pub unit: String,
    /// Matching records, newest first
    pub tenants: Vec<&'a Record>,
}

impl<'a> TenancyHistory<'a> {
    /// The current tenancy, if the unit was ever rented.
    pub fn current(&self) -> Option<&'a Record> {
        self.tenants.first().copied()
    }

    /// True when the unit has never been rented.
    pub fn is_empty(&self) -> bool {
        self.tenants.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tenants.len()
    }
}

impl Chain {
    fn newest_first(&self) -> impl Iterator<Item = &Record> {
        self.all_blocks().iter().rev().map(|b| &b.data)
    }

    /// Name of the most recent tenant of `unit`.
    pub fn latest_tenant_of(&self, unit: &str) -> Option<&str> {
        self.newest_first()
            .find(|r| r.rents(unit))
            .map(|r| r.name.as_str())
    }

    /// All tenancies of `unit`, newest first.
    pub fn all_tenants_of(&self, unit: &str) -> TenancyHistory<'_> {
        TenancyHistory {
            unit: unit.to_string(),
            tenants: self.newest_first().filter(|r| r.rents(unit)).collect(),
        }
    }

    /// Number of times `unit` has been rented.
    pub fn tenancy_count(&self, unit: &str) -> usize {
        self.iter().filter(|b| b.data.rents(unit)).count()
    }

    /// Most recent record of the tenant called `name`.
    pub fn find_tenant(&self, name: &str) -> Option<&Record> {
        self.newest_first().find(|r| r.name == name)
    }
}
