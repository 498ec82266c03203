//! Read-only queries for reference entities (badge, department, shift,
//! employee). Each lookup is one correlated read; absence is `Ok(None)`.
//!
//! Joined columns are aliased (`badgeid`, `departmentid`, `shiftid`, ...)
//! so the same row mappers serve every query that embeds an entity.

use crate::errors::{AppError, AppResult};
use crate::models::{Badge, Department, Employee, EmployeeType, Shift};
use crate::utils::time::{TIMESTAMP_FMT, parse_time};
use chrono::{NaiveDateTime, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};

pub(crate) fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(err))
}

pub(crate) fn time_column(row: &Row, name: &str) -> rusqlite::Result<NaiveTime> {
    let raw: String = row.get(name)?;
    parse_time(&raw).ok_or_else(|| conversion_error(AppError::InvalidTime(raw)))
}

pub(crate) fn timestamp_column(row: &Row, name: &str) -> rusqlite::Result<NaiveDateTime> {
    let raw: String = row.get(name)?;
    NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FMT)
        .map_err(|_| conversion_error(AppError::InvalidTime(raw)))
}

pub(crate) fn map_badge(row: &Row) -> rusqlite::Result<Badge> {
    Ok(Badge {
        id: row.get("badgeid")?,
        description: row.get("badgedescription")?,
    })
}

fn map_department(row: &Row) -> rusqlite::Result<Department> {
    Ok(Department {
        id: row.get("departmentid")?,
        terminal_id: row.get("terminalid")?,
        description: row.get("departmentdescription")?,
    })
}

fn map_shift(row: &Row) -> rusqlite::Result<Shift> {
    Ok(Shift {
        id: row.get("shiftid")?,
        description: row.get("shiftdescription")?,
        shift_start: time_column(row, "shiftstart")?,
        shift_stop: time_column(row, "shiftstop")?,
        round_interval: row.get("roundinterval")?,
        grace_period: row.get("graceperiod")?,
        dock_penalty: row.get("dockpenalty")?,
        lunch_start: time_column(row, "lunchstart")?,
        lunch_stop: time_column(row, "lunchstop")?,
        lunch_threshold: row.get("lunchthreshold")?,
    })
}

fn map_employee(row: &Row) -> rusqlite::Result<Employee> {
    let type_code: i64 = row.get("employeetypeid")?;
    let employee_type = EmployeeType::from_code(type_code).ok_or_else(|| {
        conversion_error(AppError::InvalidEmployeeType(format!(
            "Unknown employee type code: {}",
            type_code
        )))
    })?;

    Ok(Employee {
        id: row.get("id")?,
        first_name: row.get("firstname")?,
        middle_name: row.get("middlename")?,
        last_name: row.get("lastname")?,
        active: timestamp_column(row, "active")?,
        badge: map_badge(row)?,
        department: map_department(row)?,
        shift: map_shift(row)?,
        employee_type,
    })
}

pub fn badge_by_id(conn: &Connection, id: &str) -> AppResult<Option<Badge>> {
    let badge = conn
        .query_row(
            "SELECT b.id AS badgeid, b.description AS badgedescription
             FROM badge b
             WHERE b.id = ?1",
            [id],
            map_badge,
        )
        .optional()?;
    Ok(badge)
}

pub fn department_by_id(conn: &Connection, id: i64) -> AppResult<Option<Department>> {
    let dept = conn
        .query_row(
            "SELECT d.id AS departmentid, d.description AS departmentdescription, d.terminalid
             FROM department d
             WHERE d.id = ?1",
            [id],
            map_department,
        )
        .optional()?;
    Ok(dept)
}

/// Department owning a physical terminal. When several departments share a
/// terminal id the lowest department id wins.
pub fn department_by_terminal(conn: &Connection, terminal_id: i64) -> AppResult<Option<Department>> {
    let dept = conn
        .query_row(
            "SELECT d.id AS departmentid, d.description AS departmentdescription, d.terminalid
             FROM department d
             WHERE d.terminalid = ?1
             ORDER BY d.id ASC
             LIMIT 1",
            [terminal_id],
            map_department,
        )
        .optional()?;
    Ok(dept)
}

pub fn shift_by_id(conn: &Connection, id: i64) -> AppResult<Option<Shift>> {
    let shift = conn
        .query_row(
            "SELECT s.id AS shiftid, s.description AS shiftdescription,
                    s.shiftstart, s.shiftstop, s.roundinterval, s.graceperiod,
                    s.dockpenalty, s.lunchstart, s.lunchstop, s.lunchthreshold
             FROM shift s
             WHERE s.id = ?1",
            [id],
            map_shift,
        )
        .optional()?;
    Ok(shift)
}

/// Shift of the employee owning `badge`.
pub fn shift_by_badge(conn: &Connection, badge: &Badge) -> AppResult<Option<Shift>> {
    let shift = conn
        .query_row(
            "SELECT s.id AS shiftid, s.description AS shiftdescription,
                    s.shiftstart, s.shiftstop, s.roundinterval, s.graceperiod,
                    s.dockpenalty, s.lunchstart, s.lunchstop, s.lunchthreshold
             FROM employee e
             JOIN shift s ON s.id = e.shiftid
             WHERE e.badgeid = ?1",
            [&badge.id],
            map_shift,
        )
        .optional()?;
    Ok(shift)
}

/// Fully populated employee: one join across employee, badge, department
/// and shift.
pub fn employee_by_id(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let employee = conn
        .query_row(
            "SELECT e.id, e.firstname, e.middlename, e.lastname, e.employeetypeid, e.active,
                    b.id AS badgeid, b.description AS badgedescription,
                    d.id AS departmentid, d.description AS departmentdescription, d.terminalid,
                    s.id AS shiftid, s.description AS shiftdescription,
                    s.shiftstart, s.shiftstop, s.roundinterval, s.graceperiod,
                    s.dockpenalty, s.lunchstart, s.lunchstop, s.lunchthreshold
             FROM employee e
             JOIN badge b ON b.id = e.badgeid
             JOIN department d ON d.id = e.departmentid
             JOIN shift s ON s.id = e.shiftid
             WHERE e.id = ?1",
            [id],
            map_employee,
        )
        .optional()?;
    Ok(employee)
}

pub fn employee_id_by_badge(conn: &Connection, badge_id: &str) -> AppResult<Option<i64>> {
    let id = conn
        .query_row(
            "SELECT id FROM employee WHERE badgeid = ?1",
            [badge_id],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

/// Two-step resolution: badge → owning employee id → `employee_by_id`.
pub fn employee_by_badge(conn: &Connection, badge: &Badge) -> AppResult<Option<Employee>> {
    match employee_id_by_badge(conn, &badge.id)? {
        Some(id) => employee_by_id(conn, id),
        None => Ok(None),
    }
}
