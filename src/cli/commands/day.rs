use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Lookups, PunchLedger};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::Punch;
use crate::ui::messages::{header, info};
use crate::utils::colors::colorize_event;
use crate::utils::date::{format_date, parse_date_or_today};
use crate::utils::formatting::{bold, pad_left};
use crate::utils::time::format_timestamp;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { badge, date, json } = cmd {
        let day = parse_date_or_today(date.as_deref())?;

        let pool = DbPool::new(&cfg.database);
        let badge = Lookups::new(pool.clone())
            .find_badge(badge)?
            .ok_or_else(|| AppError::NotFound(format!("badge {}", badge)))?;

        let punches = PunchLedger::new(pool).list_for_day(&badge, day)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&punches)?);
            return Ok(());
        }

        if punches.is_empty() {
            info(format!("No punches for #{} on {}", badge.id, format_date(&day)));
            return Ok(());
        }

        header(format!("{} {}", badge, format_date(&day)));
        print_punches(&punches);
    }
    Ok(())
}

pub(crate) fn print_punches(punches: &[Punch]) {
    let id_w = punches
        .iter()
        .map(|p| p.id.to_string().len())
        .max()
        .unwrap_or(1);

    println!(
        "{}  {}  {}  {}",
        bold(&pad_left("ID", id_w)),
        bold("TIMESTAMP          "),
        bold("TERM"),
        bold("EVENT")
    );
    for p in punches {
        println!(
            "{}  {}  {}  {}",
            pad_left(&p.id.to_string(), id_w),
            format_timestamp(&p.original_timestamp),
            pad_left(&p.terminal_id.to_string(), 4),
            colorize_event(p.event_type)
        );
    }
}
