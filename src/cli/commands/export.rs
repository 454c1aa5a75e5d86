use super::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let mut ledger = open_ledger(cfg)?;
        ExportLogic::export(&mut ledger, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
