use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::PunchLedger;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, json } = cmd {
        let ledger = PunchLedger::new(DbPool::new(&cfg.database));
        let punch = ledger
            .find(*id)?
            .ok_or_else(|| AppError::NotFound(format!("punch #{}", id)))?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&punch)?);
        } else {
            println!("{} (terminal {})", punch.print_original(), punch.terminal_id);
        }
    }
    Ok(())
}
