use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Lookups, PunchLedger};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date::parse_date;

use super::day::print_punches;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Range { badge, from, to } = cmd {
        let begin = parse_date(from).ok_or_else(|| AppError::InvalidDate(from.to_string()))?;
        let end = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.to_string()))?;

        let pool = DbPool::new(&cfg.database);
        let badge = Lookups::new(pool.clone())
            .find_badge(badge)?
            .ok_or_else(|| AppError::NotFound(format!("badge {}", badge)))?;

        let punches = PunchLedger::new(pool).list_for_range(&badge, begin, end)?;

        if punches.is_empty() {
            info(format!("No punches for #{} between {} and {}", badge.id, from, to));
        } else {
            print_punches(&punches);
        }
    }
    Ok(())
}
