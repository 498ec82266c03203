use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", db_path.display()));

    let pool = DbPool::new(&db_path);
    pool.with_conn(|conn| {
        let applied = init_db(conn)?;
        for version in &applied {
            success(format!("Migration applied: {}", version));
        }

        if let Err(e) = log::ttlog(
            conn,
            "init",
            "Database initialized",
            &format!("Database initialized at {}", db_path.display()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
        Ok(())
    })?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
