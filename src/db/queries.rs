//! SQL for the `event` table (punches).

use crate::db::reference::{conversion_error, map_badge, timestamp_column};
use crate::errors::{AppError, AppResult};
use crate::models::{EventType, Punch};
use crate::utils::date::format_date;
use crate::utils::time::format_timestamp;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn event_type_column(row: &Row) -> rusqlite::Result<EventType> {
    let code: i64 = row.get("eventtypeid")?;
    EventType::from_code(code).ok_or_else(|| {
        conversion_error(AppError::InvalidEventType(format!(
            "Unknown event type code: {}",
            code
        )))
    })
}

pub fn map_punch(row: &Row) -> rusqlite::Result<Punch> {
    Ok(Punch {
        id: row.get("id")?,
        terminal_id: row.get("terminalid")?,
        badge: map_badge(row)?,
        original_timestamp: timestamp_column(row, "timestamp")?,
        event_type: event_type_column(row)?,
    })
}

/// Load one punch with its badge (event ⋈ badge).
pub fn punch_by_id(conn: &Connection, id: i64) -> AppResult<Option<Punch>> {
    let punch = conn
        .query_row(
            "SELECT ev.id, ev.terminalid, ev.timestamp, ev.eventtypeid,
                    b.id AS badgeid, b.description AS badgedescription
             FROM event ev
             JOIN badge b ON b.id = ev.badgeid
             WHERE ev.id = ?1",
            [id],
            map_punch,
        )
        .optional()?;
    Ok(punch)
}

/// Insert a punch and return the generated id, or `None` when no row was
/// written.
pub fn insert_punch(conn: &Connection, punch: &Punch) -> AppResult<Option<i64>> {
    let affected = conn.execute(
        "INSERT INTO event (badgeid, timestamp, terminalid, eventtypeid)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            punch.badge.id,
            format_timestamp(&punch.original_timestamp),
            punch.terminal_id,
            punch.event_type.code(),
        ],
    )?;

    if affected == 1 {
        Ok(Some(conn.last_insert_rowid()))
    } else {
        Ok(None)
    }
}

/// Minimal projection of an event row used to walk a badge's timeline.
#[derive(Debug, Clone, Copy)]
pub struct EventCursorRow {
    pub id: i64,
    pub timestamp: NaiveDateTime,
    pub event_type_code: i64,
}

/// Events of `badge_id` dated `day` or the day after, oldest first.
/// Ties on the timestamp keep insertion order.
pub fn event_rows_for_day_window(
    conn: &Connection,
    badge_id: &str,
    day: &NaiveDate,
) -> AppResult<Vec<EventCursorRow>> {
    let next = day.succ_opt().unwrap_or(*day);

    let mut stmt = conn.prepare(
        "SELECT id, timestamp, eventtypeid
         FROM event
         WHERE badgeid = ?1 AND date(timestamp) BETWEEN ?2 AND ?3
         ORDER BY timestamp ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![badge_id, format_date(day), format_date(&next)],
        |row| {
            Ok(EventCursorRow {
                id: row.get("id")?,
                timestamp: timestamp_column(row, "timestamp")?,
                event_type_code: row.get("eventtypeid")?,
            })
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
