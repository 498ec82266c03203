//! The punch ledger: authorization, persistence and day-scoped retrieval of
//! punches.
//!
//! Every operation acquires one connection for its whole duration and runs
//! its queries sequentially on it. The ledger keeps no state between calls.
//!
//! Concurrent `create` calls for the same badge are not serialized: the
//! authorization read and the insert are separate statements.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{self, EventCursorRow};
use crate::db::reference;
use crate::errors::AppResult;
use crate::models::{Badge, EventType, Punch};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use rusqlite::Connection;

/// Returned by `create` when no punch was stored. Never a valid punch id.
pub const NOT_CREATED: i64 = 0;

/// Reserved terminal id that may record punches for any department.
/// No physical terminal uses it.
pub const ADMIN_TERMINAL: i64 = 0;

#[derive(Debug, Clone)]
pub struct PunchLedger {
    pool: DbPool,
    audit: bool,
}

impl PunchLedger {
    pub fn new(pool: DbPool) -> Self {
        Self { pool, audit: false }
    }

    /// Record `punch` / `punch_rejected` rows in the internal log.
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit = enabled;
        self
    }

    pub fn find(&self, id: i64) -> AppResult<Option<Punch>> {
        self.pool.with_conn(|conn| queries::punch_by_id(conn, id))
    }

    /// Store `punch` if its terminal may record punches for the badge's
    /// owner, and return the new id.
    ///
    /// A refusal by policy is not an error: it returns `Ok(NOT_CREATED)`,
    /// as does an insert that writes no row. Storage faults are `Err`.
    pub fn create(&self, punch: &Punch) -> AppResult<i64> {
        self.pool.with_conn(|conn| {
            if !is_authorized(conn, punch)? {
                self.audit(
                    conn,
                    "punch_rejected",
                    &punch.badge.id,
                    &format!(
                        "Terminal {} is not allowed to record {} at {}",
                        punch.terminal_id,
                        punch.event_type,
                        punch.original_timestamp
                    ),
                );
                return Ok(NOT_CREATED);
            }

            let id = queries::insert_punch(conn, punch)?.unwrap_or(NOT_CREATED);

            if id != NOT_CREATED {
                self.audit(
                    conn,
                    "punch",
                    &punch.badge.id,
                    &format!("Created punch #{}: {}", id, punch.print_original()),
                );
            }

            Ok(id)
        })
    }

    /// Punches of `badge` belonging to the day window of `date`, oldest
    /// first.
    ///
    /// Rows of `date` and the following day are walked in timestamp order.
    /// The walk stops at the first row dated after `date` whose event type
    /// is not the day-closing type (clock-out). Clock-outs past midnight are
    /// kept, so an overnight shift's closing punch stays with the day it
    /// started.
    pub fn list_for_day(&self, badge: &Badge, date: NaiveDate) -> AppResult<Vec<Punch>> {
        self.pool.with_conn(|conn| {
            let rows = queries::event_rows_for_day_window(conn, &badge.id, &date)?;

            let mut punches = Vec::new();
            for id in day_window_ids(&rows, date) {
                if let Some(p) = queries::punch_by_id(conn, id)? {
                    punches.push(p);
                }
            }
            Ok(punches)
        })
    }

    /// Range listing is not implemented: always returns an empty list.
    /// Whether a range means concatenated day windows or a plain date filter
    /// is still undecided.
    pub fn list_for_range(
        &self,
        _badge: &Badge,
        _begin: NaiveDate,
        _end: NaiveDate,
    ) -> AppResult<Vec<Punch>> {
        Ok(Vec::new())
    }

    fn audit(&self, conn: &Connection, operation: &str, target: &str, message: &str) {
        if !self.audit {
            return;
        }
        if let Err(e) = ttlog(conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

fn is_authorized(conn: &Connection, punch: &Punch) -> AppResult<bool> {
    let Some(employee) = reference::employee_by_badge(conn, &punch.badge)? else {
        return Ok(false);
    };

    Ok(punch.terminal_id == employee.department.terminal_id || punch.terminal_id == ADMIN_TERMINAL)
}

/// Ids of the rows forming the day window of `date`. `rows` must be sorted
/// by timestamp and start at `date`.
fn day_window_ids(rows: &[EventCursorRow], date: NaiveDate) -> Vec<i64> {
    rows.iter()
        .take_while(|r| {
            r.timestamp.date() == date || r.event_type_code == EventType::DAY_CLOSING_CODE
        })
        .map(|r| r.id)
        .collect()
}
