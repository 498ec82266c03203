use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

fn color_for_operation(op: &str) -> &'static str {
    match op {
        "punch" => GREEN,
        "punch_rejected" => RED,
        "migration_applied" => YELLOW,
        _ => CYAN,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if !*print {
            info("Use --print to show the internal log.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database);
        let entries = pool.with_conn(load_log)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let op_w = entries
            .iter()
            .map(|e| e.operation.len())
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Internal log:\n");
        for e in entries {
            println!(
                "{:>id_w$}: {} | {}{:<op_w$}{} {} => {}",
                e.id,
                e.date,
                color_for_operation(&e.operation),
                e.operation,
                RESET,
                e.target,
                e.message,
                id_w = id_w,
                op_w = op_w
            );
        }
    }
    Ok(())
}
