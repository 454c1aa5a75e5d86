use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - an empty store holding only the header row
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.as_deref(), cli.test)?;
    cfg.roster()?;

    println!("⚙️  Initializing taxiledger…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Store       : {}", cfg.store_path().display());

    let mut store = open_store(&cfg.store_path());
    if store.initialize()? {
        success(format!("Store created at {}", store.name()));
    } else {
        info(format!("Store already present at {}", store.name()));
    }

    println!("🚕 taxiledger initialization completed!");
    Ok(())
}
