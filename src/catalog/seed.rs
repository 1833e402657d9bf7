//! Seed tenant feed.

use crate::catalog::Catalog;
use crate::ledger::record::Record;

/// (name, gender, email, phone, catalog position)
const SEED: &[(&str, &str, &str, &str, usize)] = &[
    ("Helen", "Female", "Helen123@gmail.com", "0842566597", 0),
    ("Elsie", "Female", "Elsie123@gmail.com", "0652589651", 1),
    ("James", "Male", "James123@gmail.com", "0826541857", 2),
    ("Steven", "Male", "Steven123@gmail.com", "0632585694", 3),
    ("Edward", "Male", "Edward123@gmail.com", "0611471417", 4),
    ("Linda", "Female", "Linda123@gmail.com", "0815556966", 0),
    ("Sandra", "Female", "Sandra123@gmail.com", "0826541857", 1),
    ("Anna", "Female", "Anna123@gmail.com", "0965455532", 2),
    ("Peter", "Male", "Peter123@gmail.com", "0954771919", 3),
];

/// Initial tenancies, oldest first.
///
/// Entries whose unit is missing from `catalog` are skipped.
pub fn seed_records(catalog: &Catalog) -> Vec<Record> {
    SEED.iter()
        .filter_map(|&(name, gender, email, phone, position)| {
            catalog
                .get(position)
                .map(|unit| Record::new(name, gender, email, phone, unit.clone()))
        })
        .collect()
}
