//! Hash-linked chain of tenancy blocks.
//!
//! Blocks are stored by position; each block refers back to its
//! predecessor only through the recorded `prev_hash`.

use crate::core::{now, Error, Hash256, Result, Timestamp};
use crate::ledger::block::Block;
use crate::ledger::record::Record;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Position (0-based) of the first block whose recorded previous hash is
/// cross-checked against its predecessor.
const FIRST_CHECKED_POSITION: usize = 2;

/// Chain metadata.
#[derive(Clone, Debug)]
pub struct ChainMetadata {
    /// Chain creation timestamp
    pub created: Timestamp,
    /// Number of tenancies appended after genesis
    pub total_tenancies: u64,
    /// Number of applied in-place edits
    pub total_edits: u64,
}

/// Result of chain verification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChainVerification {
    /// Whether the chain is valid
    pub valid: bool,
    /// Number of blocks walked before the first break
    pub blocks_verified: u64,
    /// Whether tampering was detected
    pub tamper_detected: bool,
    /// 1-based index of the first block whose recorded previous hash
    /// disagrees with its predecessor
    pub broken_at: Option<usize>,
}

/// One block as seen by an audit walk.
#[derive(Clone, Debug, Serialize)]
pub struct BlockAudit {
    pub index: usize,
    pub prev_hash: Option<Hash256>,
    pub recorded_hash: Hash256,
    pub recomputed_hash: Hash256,
    pub data: Record,
}

/// Block listing produced alongside verification.
#[derive(Clone, Debug, Serialize)]
pub struct ChainAudit {
    /// Blocks walked, up to and including the first broken one
    pub blocks: Vec<BlockAudit>,
    /// Verification outcome of the same walk
    pub verification: ChainVerification,
}

/// Tenancy blockchain.
pub struct Chain {
    /// Chain of blocks, genesis first
    blocks: Vec<Block>,
    /// Chain metadata
    metadata: ChainMetadata,
}

impl Chain {
    /// Create a new chain holding only the genesis block.
    pub fn new() -> Result<Self> {
        let genesis = Block::genesis()?;

        let metadata = ChainMetadata {
            created: now(),
            total_tenancies: 0,
            total_edits: 0,
        };

        Ok(Self {
            blocks: vec![genesis],
            metadata,
        })
    }

    /// Create a chain and append each record in order.
    pub fn with_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut chain = Self::new()?;
        for record in records {
            chain.append(record)?;
        }
        info!(blocks = chain.len(), "chain initialized");
        Ok(chain)
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false: the genesis block is never removed.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Chain metadata.
    pub fn metadata(&self) -> &ChainMetadata {
        &self.metadata
    }

    /// Newest block.
    pub fn head(&self) -> &Block {
        // Constructors never produce an empty chain and blocks are never removed.
        &self.blocks[self.blocks.len() - 1]
    }

    /// Recorded hash of the newest block.
    pub fn head_hash(&self) -> &Hash256 {
        &self.head().hash
    }

    /// Append a tenancy record as a new block linked to the current head.
    pub fn append(&mut self, record: Record) -> Result<Hash256> {
        let index = self.blocks.len() + 1;
        let unit = record.unit.name.clone();
        let block = Block::new(index, record, Some(*self.head_hash()))?;
        let hash = block.hash;

        self.metadata.total_tenancies += 1;
        self.blocks.push(block);

        debug!(index, unit = %unit, hash = %hash, "tenancy appended");
        Ok(hash)
    }

    /// Get block by its 1-based index.
    pub fn get(&self, index: usize) -> Option<&Block> {
        index.checked_sub(1).and_then(|i| self.blocks.get(i))
    }

    pub(super) fn get_mut(&mut self, index: usize) -> Option<&mut Block> {
        match index.checked_sub(1) {
            Some(i) => self.blocks.get_mut(i),
            None => None,
        }
    }

    pub(super) fn note_edit(&mut self) {
        self.metadata.total_edits += 1;
    }

    /// Iterate blocks oldest to newest.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Get all blocks.
    pub fn all_blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Verify chain-of-custody.
    ///
    /// Recomputes each block's hash from its current content and, from the
    /// third block on, compares the recorded previous hash against the
    /// recomputed hash of the predecessor. Stops at the first mismatch.
    ///
    /// Editing the newest block cannot be detected: no successor records
    /// its hash, and a block's own recorded hash is never compared against
    /// its own content.
    pub fn verify(&self) -> Result<ChainVerification> {
        self.walk(|_, _| {})
    }

    /// Verify and collect a per-block listing of the walk.
    pub fn audit(&self) -> Result<ChainAudit> {
        let mut blocks = Vec::new();
        let verification = self.walk(|block, recomputed| {
            blocks.push(BlockAudit {
                index: block.index,
                prev_hash: block.prev_hash,
                recorded_hash: block.hash,
                recomputed_hash: recomputed,
                data: block.data.clone(),
            })
        })?;
        Ok(ChainAudit {
            blocks,
            verification,
        })
    }

    fn walk<F>(&self, mut visit: F) -> Result<ChainVerification>
    where
        F: FnMut(&Block, Hash256),
    {
        let mut verification = ChainVerification {
            valid: true,
            blocks_verified: 0,
            tamper_detected: false,
            broken_at: None,
        };
        let mut previous: Option<Hash256> = None;

        for (position, block) in self.blocks.iter().enumerate() {
            let recomputed = block.recompute_hash()?;
            visit(block, recomputed);

            if position >= FIRST_CHECKED_POSITION && block.prev_hash != previous {
                warn!(index = block.index, "chain of custody broken");
                verification.valid = false;
                verification.tamper_detected = true;
                verification.broken_at = Some(block.index);
                break;
            }

            verification.blocks_verified += 1;
            previous = Some(recomputed);
        }

        Ok(verification)
    }

    /// Export chain to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.blocks)?)
    }

    /// Import chain from JSON.
    ///
    /// The snapshot must be structurally sound and pass [`Chain::verify`].
    pub fn from_json(json: &str) -> Result<Self> {
        let blocks: Vec<Block> = serde_json::from_str(json)
            .map_err(|e| Error::DeserializationError(e.to_string()))?;

        if blocks.is_empty() {
            return Err(Error::InvalidChain("Empty chain".into()));
        }

        for (position, block) in blocks.iter().enumerate() {
            if block.index != position + 1 {
                return Err(Error::InvalidChain(format!(
                    "Invalid index: expected {}, got {}",
                    position + 1,
                    block.index
                )));
            }
            if block.is_genesis() != (position == 0) {
                return Err(Error::InvalidChain(format!(
                    "Block {} has a misplaced genesis link",
                    block.index
                )));
            }
        }

        let metadata = ChainMetadata {
            created: now(),
            total_tenancies: blocks.len() as u64 - 1,
            total_edits: 0,
        };

        let chain = Self { blocks, metadata };

        let verification = chain.verify()?;
        if let Some(index) = verification.broken_at {
            return Err(Error::ChainIntegrityViolated(index));
        }

        Ok(chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::record::Unit;

    fn tenant(name: &str, unit: &str) -> Record {
        Record::new(name, "Male", "", "", Unit::named(unit))
    }

    fn chain_of(n: usize) -> Chain {
        Chain::with_records((0..n).map(|i| tenant(&format!("Tenant {}", i), "Hillside"))).unwrap()
    }

    #[test]
    fn test_chain_creation() {
        let chain = Chain::new().unwrap();
        assert_eq!(chain.len(), 1);
        assert!(!chain.is_empty());
        let genesis = chain.get(1).unwrap();
        assert!(genesis.is_genesis());
        assert_eq!(chain.head_hash(), &genesis.hash);
    }

    #[test]
    fn test_append_links_to_head() {
        let mut chain = Chain::new().unwrap();
        let genesis_hash = *chain.head_hash();

        let hash = chain.append(tenant("Helen", "The Gables")).unwrap();

        let block = chain.get(2).unwrap();
        assert_eq!(block.index, 2);
        assert_eq!(block.prev_hash, Some(genesis_hash));
        assert_eq!(block.hash, hash);
        assert_eq!(chain.head_hash(), &hash);
        assert_eq!(chain.metadata().total_tenancies, 1);
    }

    #[test]
    fn test_indices_and_links_are_contiguous() {
        let chain = chain_of(6);
        let blocks = chain.all_blocks();

        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.index, i + 1);
            if i > 0 {
                assert_eq!(block.prev_hash, Some(blocks[i - 1].hash));
            }
        }
    }

    #[test]
    fn test_append_links_to_tail_after_reads() {
        let mut chain = chain_of(2);

        let _ = chain.metadata().total_tenancies;
        let _ = chain.head();
        let _ = chain.get(2);
        let _ = chain.iter().count();
        let _ = chain.all_blocks().len();
        let _ = chain.to_json().unwrap();
        chain.verify().unwrap();
        chain.audit().unwrap();

        chain.append(tenant("Nok", "The Gables")).unwrap();
        chain.append(tenant("Linda", "Hillside")).unwrap();

        let blocks = chain.all_blocks();
        for i in 1..blocks.len() {
            assert_eq!(blocks[i].prev_hash, Some(blocks[i - 1].hash));
        }
        assert_eq!(chain.head_hash(), &blocks[blocks.len() - 1].hash);
        assert_eq!(chain.head().index, chain.len());
        assert_eq!(chain.metadata().total_tenancies, 4);
        assert!(chain.verify().unwrap().valid);
    }

    #[test]
    fn test_get_out_of_range() {
        let chain = chain_of(2);
        assert!(chain.get(0).is_none());
        assert!(chain.get(3).is_some());
        assert!(chain.get(4).is_none());
    }

    #[test]
    fn test_chain_verification() {
        let chain = chain_of(4);
        let verification = chain.verify().unwrap();

        assert!(verification.valid);
        assert!(!verification.tamper_detected);
        assert_eq!(verification.broken_at, None);
        assert_eq!(verification.blocks_verified, 5);
    }

    #[test]
    fn test_verify_detects_broken_link() {
        let mut chain = chain_of(4);
        chain.get_mut(3).unwrap().data.name = "Mallory".to_string();

        let verification = chain.verify().unwrap();
        assert!(!verification.valid);
        assert!(verification.tamper_detected);
        assert_eq!(verification.broken_at, Some(4));
        assert_eq!(verification.blocks_verified, 3);
    }

    #[test]
    fn test_verify_does_not_mutate() {
        let mut chain = chain_of(3);
        chain.get_mut(2).unwrap().data.phone = "000".to_string();
        let recorded: Vec<Hash256> = chain.iter().map(|b| b.hash).collect();

        let first = chain.verify().unwrap();
        let second = chain.verify().unwrap();

        assert_eq!(first, second);
        let after: Vec<Hash256> = chain.iter().map(|b| b.hash).collect();
        assert_eq!(recorded, after);
    }

    #[test]
    fn test_audit_lists_until_break() {
        let mut chain = chain_of(5);
        chain.get_mut(3).unwrap().data.email = "x@example.com".to_string();

        let audit = chain.audit().unwrap();
        assert_eq!(audit.verification.broken_at, Some(4));
        assert_eq!(audit.blocks.len(), 4);
        assert_eq!(audit.blocks[2].index, 3);
        assert_ne!(audit.blocks[2].recorded_hash, audit.blocks[2].recomputed_hash);
        assert_eq!(audit.blocks[1].recorded_hash, audit.blocks[1].recomputed_hash);
    }

    #[test]
    fn test_audit_untampered_lists_everything() {
        let chain = chain_of(3);
        let audit = chain.audit().unwrap();
        assert!(audit.verification.valid);
        assert_eq!(audit.blocks.len(), chain.len());
    }

    #[test]
    fn test_chain_serialization() {
        let chain = chain_of(3);

        let json = chain.to_json().unwrap();
        let restored = Chain::from_json(&json).unwrap();

        assert_eq!(restored.len(), chain.len());
        assert_eq!(restored.head_hash(), chain.head_hash());
        assert_eq!(restored.metadata().total_tenancies, 3);
        assert_eq!(restored.all_blocks(), chain.all_blocks());
    }

    #[test]
    fn test_import_rejects_tampered_snapshot() {
        let mut chain = chain_of(3);
        chain.get_mut(2).unwrap().data.name = "Mallory".to_string();

        let json = chain.to_json().unwrap();
        let result = Chain::from_json(&json);
        assert!(matches!(result, Err(Error::ChainIntegrityViolated(3))));
    }

    #[test]
    fn test_import_rejects_malformed_snapshots() {
        assert!(matches!(Chain::from_json("[]"), Err(Error::InvalidChain(_))));
        assert!(matches!(
            Chain::from_json("not json"),
            Err(Error::DeserializationError(_))
        ));

        let chain = chain_of(2);
        let mut blocks = chain.all_blocks().to_vec();
        blocks.swap(1, 2);
        let json = serde_json::to_string(&blocks).unwrap();
        assert!(matches!(Chain::from_json(&json), Err(Error::InvalidChain(_))));
    }
}
