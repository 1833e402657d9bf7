//! Demo: seed a tenancy ledger, tamper with it and show what verification
//! and the tenancy queries report.

use tenancy_ledger::catalog::{seed_records, Catalog};
use tenancy_ledger::config::LedgerConfig;
use tenancy_ledger::ledger::{Chain, EditRequest, Record, RecordField, SharedChain};
use tenancy_ledger::monitoring::init_logging;
use tenancy_ledger::presenter::{Presenter, TextPresenter};
use tenancy_ledger::{Error, Result};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => LedgerConfig::load(path)?,
        None => LedgerConfig::default(),
    };
    init_logging(&config.logging.level, config.logging.format)?;

    let catalog = Catalog::standard();
    let seed = if config.seed { seed_records(&catalog) } else { Vec::new() };
    let chain = SharedChain::new(Chain::with_records(seed)?);

    let gables = unit(&catalog, 0)?;
    let oaklands = unit(&catalog, 4)?;

    chain
        .append(Record::new("Nok", "Male", "Nok012@gmail.com", "0657019654", gables))
        .await?;
    chain
        .edit(2, EditRequest::field(RecordField::Name, "Nok").with_unit(oaklands))
        .await?;

    let ledger = chain.read().await;
    info!(blocks = ledger.len(), edits = ledger.metadata().total_edits, "ledger ready");

    let mut presenter = TextPresenter::stdout();
    presenter.audit(&ledger.audit()?)?;

    let house = "Sunnyside";
    presenter.history(&ledger.all_tenants_of(house))?;
    presenter.latest_tenant(house, ledger.latest_tenant_of(house))?;
    presenter.tenancy_count(house, ledger.tenancy_count(house))?;
    presenter.tenant("Anna", ledger.find_tenant("Anna"))?;

    Ok(())
}

fn unit(catalog: &Catalog, position: usize) -> Result<tenancy_ledger::ledger::Unit> {
    catalog
        .get(position)
        .cloned()
        .ok_or_else(|| Error::Config(format!("catalog has no unit at position {}", position)))
}
