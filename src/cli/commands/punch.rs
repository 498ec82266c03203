use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Lookups, NOT_CREATED, PunchLedger};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{EventType, Punch};
use crate::ui::messages::{success, warning};
use crate::utils::time::parse_timestamp;
use chrono::Local;

/// Record a punch. A policy rejection is reported but is not a failure.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch {
        badge,
        terminal,
        event_type,
        at,
    } = cmd
    {
        let et = EventType::et_from_str(event_type)
            .ok_or_else(|| AppError::InvalidEventType(event_type.to_string()))?;

        let timestamp = match at {
            Some(s) => parse_timestamp(s)?,
            None => Local::now().naive_local(),
        };

        let pool = DbPool::new(&cfg.database);
        let badge = Lookups::new(pool.clone())
            .find_badge(badge)?
            .ok_or_else(|| AppError::NotFound(format!("badge {}", badge)))?;

        let punch = Punch::new(*terminal, badge, timestamp, et);
        let ledger = PunchLedger::new(pool).with_audit(cfg.audit_log);

        let id = ledger.create(&punch)?;
        if id == NOT_CREATED {
            warning(format!(
                "Punch rejected: terminal {} is not authorized for badge #{}",
                punch.terminal_id, punch.badge.id
            ));
        } else {
            success(format!("Punch #{} recorded: {}", id, punch.print_original()));
        }
    }
    Ok(())
}
