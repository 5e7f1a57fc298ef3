use std::io::Write;

use anyhow::Context;

use warehouse_app::{AppConfig, WarehouseManager, demo};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    warehouse_observability::init_with(&config.tracing);

    let today = config.seed_date_or_today();
    let stdout = std::io::stdout();
    let mut manager = WarehouseManager::new(stdout.lock());

    // Sample data is fixed; a failure here is a programming error, not a runtime condition.
    manager
        .seed(today)
        .context("failed to seed sample inventory")?;
    tracing::info!(%today, "sample inventory seeded");

    demo::run(&mut manager).context("failed to write inventory report")?;
    manager
        .into_output()
        .flush()
        .context("failed to flush inventory report")?;

    Ok(())
}
