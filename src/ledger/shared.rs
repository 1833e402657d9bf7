//! Shared handle for a chain used by several tasks.
//!
//! `append` and `edit` run under the write lock; queries and verification
//! run under read locks.

use crate::core::{Hash256, Result};
use crate::ledger::chain::{Chain, ChainVerification};
use crate::ledger::editor::{EditOutcome, EditRequest};
use crate::ledger::record::Record;
use std::sync::Arc;
use tokio::sync::{RwLock, RwLockReadGuard};

/// Cloneable, lock-protected chain handle.
#[derive(Clone)]
pub struct SharedChain {
    inner: Arc<RwLock<Chain>>,
}

impl SharedChain {
    /// Wrap an existing chain.
    pub fn new(chain: Chain) -> Self {
        Self {
            inner: Arc::new(RwLock::new(chain)),
        }
    }

    /// Read access for queries.
    pub async fn read(&self) -> RwLockReadGuard<'_, Chain> {
        self.inner.read().await
    }

    pub async fn append(&self, record: Record) -> Result<Hash256> {
        self.inner.write().await.append(record)
    }

    pub async fn edit(&self, index: usize, request: EditRequest) -> Result<EditOutcome> {
        self.inner.write().await.edit(index, request)
    }

    pub async fn verify(&self) -> Result<ChainVerification> {
        self.inner.read().await.verify()
    }

    pub async fn latest_tenant_of(&self, unit: &str) -> Option<String> {
        self.read().await.latest_tenant_of(unit).map(str::to_string)
    }

    pub async fn tenancy_count(&self, unit: &str) -> usize {
        self.read().await.tenancy_count(unit)
    }

    pub async fn find_tenant(&self, name: &str) -> Option<Record> {
        self.read().await.find_tenant(name).cloned()
    }
}
