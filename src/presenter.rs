//! Output of query and verification results.
//!
//! The ledger never formats anything itself; callers hand results to a
//! [`Presenter`].

use crate::core::Result;
use crate::ledger::{ChainAudit, ChainVerification, Record, TenancyHistory};
use std::io::Write;

/// Sink for ledger results.
pub trait Presenter {
    /// Block listing with the verification outcome.
    fn audit(&mut self, audit: &ChainAudit) -> Result<()>;

    /// Verification outcome alone.
    fn verification(&mut self, verification: &ChainVerification) -> Result<()>;

    /// Tenancy history of a unit.
    fn history(&mut self, history: &TenancyHistory<'_>) -> Result<()>;

    /// Latest tenant of a unit.
    fn latest_tenant(&mut self, unit: &str, tenant: Option<&str>) -> Result<()>;

    /// Number of tenancies of a unit.
    fn tenancy_count(&mut self, unit: &str, count: usize) -> Result<()>;

    /// Tenant lookup by name.
    fn tenant(&mut self, name: &str, record: Option<&Record>) -> Result<()>;
}

/// Human-readable presenter printing records as indented JSON.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter and return the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextPresenter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn audit(&mut self, audit: &ChainAudit) -> Result<()> {
        for block in &audit.blocks {
            writeln!(self.out, "Block: {}", block.index)?;
            writeln!(
                self.out,
                "Previous Hash: {}",
                block.prev_hash.map(|h| h.to_hex()).unwrap_or_default()
            )?;
            writeln!(self.out, "Hash: {}", block.recomputed_hash)?;
            writeln!(
                self.out,
                "Data in Block: {}",
                serde_json::to_string_pretty(&block.data)?
            )?;
            writeln!(self.out)?;
        }
        self.verification(&audit.verification)
    }

    fn verification(&mut self, verification: &ChainVerification) -> Result<()> {
        match verification.broken_at {
            Some(index) => {
                writeln!(self.out, "!!!!! Found data change !!!!!")?;
                writeln!(
                    self.out,
                    "Data in Block: {} has been modified.",
                    index.saturating_sub(1)
                )?;
            }
            None => writeln!(
                self.out,
                "Chain verified: {} block(s) intact",
                verification.blocks_verified
            )?,
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn history(&mut self, history: &TenancyHistory<'_>) -> Result<()> {
        writeln!(self.out, "RentHouseName: {}", history.unit)?;
        match history.current() {
            Some(current) => {
                writeln!(self.out, "Current tenant: {}", current.name)?;
                writeln!(
                    self.out,
                    "All tenanted: {}",
                    serde_json::to_string_pretty(&history.tenants)?
                )?;
            }
            None => writeln!(self.out, "No tenancies recorded")?,
        }
        Ok(())
    }

    fn latest_tenant(&mut self, unit: &str, tenant: Option<&str>) -> Result<()> {
        match tenant {
            Some(name) => writeln!(self.out, "Latest tenant of {} is name: {}", unit, name)?,
            None => writeln!(self.out, "{} has never been rented", unit)?,
        }
        Ok(())
    }

    fn tenancy_count(&mut self, unit: &str, count: usize) -> Result<()> {
        writeln!(self.out, "Amount {} has been rented: {}", unit, count)?;
        Ok(())
    }

    fn tenant(&mut self, name: &str, record: Option<&Record>) -> Result<()> {
        match record {
            Some(record) => writeln!(
                self.out,
                "Tenant {}",
                serde_json::to_string_pretty(record)?
            )?,
            None => writeln!(self.out, "Tenant {} not found", name)?,
        }
        Ok(())
    }
}
