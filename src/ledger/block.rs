//! Tenancy block structure.
//!
//! Each block wraps one [`Record`] with its 1-based index, the hash of its
//! predecessor and its own content hash.

use crate::core::{sha3_256_multi, Hash256, Result};
use crate::ledger::record::Record;
use serde::{Deserialize, Serialize};

/// Derive the content hash of a block.
///
/// `SHA3-256(decimal(index) ++ encode(payload) ++ prev_hash)`, where an
/// absent previous hash contributes no bytes.
pub fn derive_hash(
    index: usize,
    payload: &Record,
    prev_hash: Option<&Hash256>,
) -> Result<Hash256> {
    let index_text = index.to_string();
    let encoded = payload.encode()?;
    let prev_bytes: &[u8] = match prev_hash {
        Some(hash) => hash.as_bytes(),
        None => &[],
    };

    Ok(sha3_256_multi(&[index_text.as_bytes(), &encoded, prev_bytes]))
}

/// A single ledger entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// 1-based position in the chain
    pub index: usize,
    /// Content hash recorded when the block was created
    pub hash: Hash256,
    /// Tenancy payload
    pub data: Record,
    /// Hash of the previous block (`None` for genesis)
    pub prev_hash: Option<Hash256>,
}

impl Block {
    /// Create a block and derive its hash.
    pub fn new(index: usize, data: Record, prev_hash: Option<Hash256>) -> Result<Self> {
        let hash = derive_hash(index, &data, prev_hash.as_ref())?;
        Ok(Self {
            index,
            hash,
            data,
            prev_hash,
        })
    }

    /// Create the genesis block: index 1, empty payload, no predecessor.
    pub fn genesis() -> Result<Self> {
        Self::new(1, Record::empty(), None)
    }

    /// Recompute the hash from the block's current content.
    ///
    /// The stored `hash` is left untouched.
    pub fn recompute_hash(&self) -> Result<Hash256> {
        derive_hash(self.index, &self.data, self.prev_hash.as_ref())
    }

    /// Whether this is the chain root.
    pub fn is_genesis(&self) -> bool {
        self.prev_hash.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::record::Unit;

    fn tenant(name: &str, unit: &str) -> Record {
        Record::new(name, "Female", "", "", Unit::named(unit))
    }

    #[test]
    fn test_block_creation() {
        let genesis = Block::genesis().unwrap();
        let block = Block::new(2, tenant("Helen", "The Gables"), Some(genesis.hash)).unwrap();

        assert_eq!(block.index, 2);
        assert_eq!(block.prev_hash, Some(genesis.hash));
        assert_ne!(block.hash, Hash256::new([0u8; 32]));
        assert!(!block.is_genesis());
    }

    #[test]
    fn test_derive_hash_deterministic() {
        let record = tenant("Helen", "The Gables");
        let prev = Hash256::new([7u8; 32]);

        let first = derive_hash(2, &record, Some(&prev)).unwrap();
        let second = derive_hash(2, &record, Some(&prev)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_hash_covers_every_input() {
        let record = tenant("Helen", "The Gables");
        let prev = Hash256::new([7u8; 32]);
        let base = derive_hash(2, &record, Some(&prev)).unwrap();

        assert_ne!(base, derive_hash(3, &record, Some(&prev)).unwrap());
        assert_ne!(base, derive_hash(2, &tenant("Nok", "The Gables"), Some(&prev)).unwrap());
        assert_ne!(base, derive_hash(2, &record, Some(&Hash256::new([0u8; 32]))).unwrap());
        assert_ne!(base, derive_hash(2, &record, None).unwrap());
    }

    #[test]
    fn test_genesis_block() {
        let genesis = Block::genesis().unwrap();
        assert_eq!(genesis.index, 1);
        assert!(genesis.is_genesis());
        assert_eq!(genesis.data, Record::empty());
        assert_eq!(genesis.prev_hash, None);
        assert_eq!(genesis.hash, derive_hash(1, &Record::empty(), None).unwrap());
    }

    #[test]
    fn test_recompute_detects_payload_change() {
        let mut block = Block::new(2, tenant("Helen", "The Gables"), None).unwrap();
        assert_eq!(block.recompute_hash().unwrap(), block.hash);

        block.data.name = "Modified".to_string();
        assert_ne!(block.recompute_hash().unwrap(), block.hash);
    }
}
