//! Unit catalog.

use crate::ledger::record::Unit;

/// Ordered list of rentable units.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    units: Vec<Unit>,
}

impl Catalog {
    /// Build a catalog from the given units.
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    /// The five New York units the demo ledger is seeded with.
    pub fn standard() -> Self {
        Self::new(vec![
            Unit::new("The Gables", 1, 1, "Midtown", "All Midtown", "Manhattan", "916 sqft", 4500),
            Unit::new("Hillside", 1, 1, "Astoria", "Northwest Queens", "Queens", "996 sqft", 3500),
            Unit::new("Sunnyside", 1, 2, "Tribeca", "All Downtown", "Manhattan", "1600 sqft", 10000),
            Unit::new(
                "Foxmoor Hall",
                2,
                2,
                "Central Park South",
                "All Midtown",
                "Manhattan",
                "1200 sqft",
                5800,
            ),
            Unit::new(
                "Oaklands",
                1,
                1,
                "Hamilton Heights",
                "All Upper Manhattan",
                "Manhattan",
                "687 sqft",
                2150,
            ),
        ])
    }

    /// Unit at catalog position.
    pub fn get(&self, position: usize) -> Option<&Unit> {
        self.units.get(position)
    }

    /// Unit by name.
    pub fn by_name(&self, name: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(0).unwrap().name, "The Gables");
        assert_eq!(catalog.by_name("Sunnyside").unwrap().rent, 10000);
        assert!(catalog.by_name("Nowhere").is_none());
    }
}
