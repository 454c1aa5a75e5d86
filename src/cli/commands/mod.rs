pub mod add;
pub mod config;
pub mod export;
pub mod init;
pub mod list;

use crate::config::Config;
use crate::core::Ledger;
use crate::core::coerce::LoadReport;
use crate::errors::AppResult;
use crate::store::{CachedStore, TableStore, open_store};
use crate::ui::messages::warning;

pub type CliLedger = Ledger<CachedStore<Box<dyn TableStore>>>;

/// Open the configured store behind the read cache.
pub fn open_ledger(cfg: &Config) -> AppResult<CliLedger> {
    let store = CachedStore::new(open_store(&cfg.store_path()), cfg.cache_ttl());
    Ok(Ledger::new(store, cfg.roster()?, cfg.input_policy))
}

/// Tell the user how many fields were defaulted (`source`: "stored", "input").
pub fn warn_coerced(source: &str, report: &LoadReport) {
    if report.is_clean() {
        return;
    }

    warning(format!(
        "{} {} field(s) could not be parsed and were defaulted (0 / no date).",
        report.coerced.len(),
        source
    ));
    for e in report.coerced.iter().take(5) {
        warning(format!("  {e}"));
    }
}
