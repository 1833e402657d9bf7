//! Tenancy payloads carried by ledger blocks.

use serde::{Deserialize, Serialize};

/// Snapshot of a rentable unit at the time of a tenancy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit name, the key used by tenancy queries
    pub name: String,
    /// Number of bedrooms
    pub bedrooms: i64,
    /// Number of bathrooms
    pub bathrooms: i64,
    /// Neighborhood
    pub neighborhood: String,
    /// Submarket
    pub submarket: String,
    /// Borough
    pub borough: String,
    /// Size descriptor, e.g. "916 sqft"
    pub size: String,
    /// Monthly rent
    pub rent: i64,
}

impl Unit {
    /// Create a unit snapshot.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        bedrooms: i64,
        bathrooms: i64,
        neighborhood: &str,
        submarket: &str,
        borough: &str,
        size: &str,
        rent: i64,
    ) -> Self {
        Self {
            name: name.to_string(),
            bedrooms,
            bathrooms,
            neighborhood: neighborhood.to_string(),
            submarket: submarket.to_string(),
            borough: borough.to_string(),
            size: size.to_string(),
            rent,
        }
    }

    /// Unit snapshot that carries only a name.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// A tenant together with the unit they occupy.
///
/// `Record` owns its `Unit`; cloning a record never aliases the snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Tenant name
    pub name: String,
    /// Tenant gender
    pub gender: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
    /// Rented unit
    pub unit: Unit,
}

impl Record {
    /// Create a record.
    pub fn new(name: &str, gender: &str, email: &str, phone: &str, unit: Unit) -> Self {
        Self {
            name: name.to_string(),
            gender: gender.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            unit,
        }
    }

    /// The empty record carried by the genesis block.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Canonical byte encoding used for hashing.
    pub fn encode(&self) -> crate::core::Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Whether this record rents the named unit.
    pub fn rents(&self, unit_name: &str) -> bool {
        self.unit.name == unit_name
    }
}
