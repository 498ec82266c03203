use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Lookups;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { id, badge, json } = cmd {
        let lookups = Lookups::new(DbPool::new(&cfg.database));

        let employee = match (id, badge) {
            (Some(id), _) => lookups
                .find_employee(*id)?
                .ok_or_else(|| AppError::NotFound(format!("employee #{}", id)))?,
            (None, Some(badge_id)) => {
                let badge = lookups
                    .find_badge(badge_id)?
                    .ok_or_else(|| AppError::NotFound(format!("badge {}", badge_id)))?;
                lookups
                    .find_employee_by_badge(&badge)?
                    .ok_or_else(|| AppError::NotFound(format!("employee with badge {}", badge_id)))?
            }
            (None, None) => return Err(AppError::Other("either --id or --badge is required".into())),
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&employee)?);
        } else {
            println!("{}", employee);
            println!("  Department: {}", employee.department);
            println!("  Shift: {}", employee.shift);
        }
    }
    Ok(())
}
