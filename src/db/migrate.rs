//! Schema migrations.
//!
//! Each migration is applied once and marked with a `migration_applied` row
//! in the `log` table, keyed by its version string.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20261019_0001_reference_tables",
        description: "Created badge, department, shift and employee tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS badge (
            id           TEXT PRIMARY KEY,
            description  TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS department (
            id           INTEGER PRIMARY KEY,
            description  TEXT NOT NULL,
            terminalid   INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS shift (
            id              INTEGER PRIMARY KEY,
            description     TEXT NOT NULL,
            shiftstart      TEXT NOT NULL,
            shiftstop       TEXT NOT NULL,
            roundinterval   INTEGER NOT NULL DEFAULT 0,
            graceperiod     INTEGER NOT NULL DEFAULT 0,
            dockpenalty     INTEGER NOT NULL DEFAULT 0,
            lunchstart      TEXT NOT NULL,
            lunchstop       TEXT NOT NULL,
            lunchthreshold  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS employee (
            id              INTEGER PRIMARY KEY,
            firstname       TEXT NOT NULL,
            middlename      TEXT NOT NULL DEFAULT '',
            lastname        TEXT NOT NULL,
            employeetypeid  INTEGER NOT NULL,
            badgeid         TEXT NOT NULL UNIQUE REFERENCES badge(id),
            shiftid         INTEGER NOT NULL REFERENCES shift(id),
            departmentid    INTEGER NOT NULL REFERENCES department(id),
            active          TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_department_terminal ON department(terminalid);
        "#,
    },
    Migration {
        version: "20261019_0002_event_table",
        description: "Created event table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS event (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            terminalid   INTEGER NOT NULL,
            badgeid      TEXT NOT NULL REFERENCES badge(id),
            timestamp    TEXT NOT NULL,
            eventtypeid  INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_event_badge_timestamp ON event(badgeid, timestamp);
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}

/// Run one migration's DDL and write its marker row atomically.
fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;
    ttlog(&tx, "migration_applied", m.version, m.description)?;
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_apply_once() {
        let conn = Connection::open_in_memory().unwrap();

        let first = run_pending_migrations(&conn).unwrap();
        assert_eq!(first.len(), MIGRATIONS.len());

        let second = run_pending_migrations(&conn).unwrap();
        assert!(second.is_empty());

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                 WHERE type = 'table'
                   AND name IN ('badge', 'department', 'shift', 'employee', 'event', 'log')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 6);
    }

    #[test]
    fn failed_migration_leaves_no_partial_schema() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_log_table(&conn).unwrap();

        let broken = Migration {
            version: "broken",
            description: "Half-valid DDL",
            sql: "CREATE TABLE half_done (id INTEGER); CREATE TABLE (;",
        };

        assert!(matches!(apply(&conn, &broken), Err(AppError::Migration(_))));
        assert!(!is_applied(&conn, "broken").unwrap());

        let leftovers: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'half_done'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(leftovers, 0);
    }
}
