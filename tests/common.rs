#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::{Connection, params};
use std::env;
use std::fs;
use std::path::PathBuf;
use tasclock::db::initialize::init_db;
use tasclock::models::{Badge, EventType};

/// Department terminal of the day-shift employee (#1).
pub const ASSEMBLY_TERMINAL: i64 = 5;
/// Department terminal of the night-shift employee (#2).
pub const GRINDING_TERMINAL: i64 = 9;

pub const DAY_BADGE: &str = "08D01475";
pub const NIGHT_BADGE: &str = "D2C39273";
/// A badge that no employee owns.
pub const ORPHAN_BADGE: &str = "0FFA272B";

pub fn tas() -> Command {
    cargo_bin_cmd!("tasclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tasclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create the schema and load a small reference dataset:
/// two departments, two shifts, two employees and an unowned badge.
pub fn seed_reference_data(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    init_db(&conn).expect("init db");

    conn.execute_batch(&format!(
        r#"
        INSERT INTO badge (id, description) VALUES
            ('{DAY_BADGE}', 'Chapman, Joshua E'),
            ('{NIGHT_BADGE}', 'Littell, Amie D'),
            ('{ORPHAN_BADGE}', 'Spare badge');

        INSERT INTO department (id, description, terminalid) VALUES
            (1, 'Assembly', {ASSEMBLY_TERMINAL}),
            (2, 'Grinding', {GRINDING_TERMINAL});

        INSERT INTO shift (id, description, shiftstart, shiftstop, roundinterval, graceperiod,
                           dockpenalty, lunchstart, lunchstop, lunchthreshold) VALUES
            (1, 'Shift 1', '07:00:00', '15:30:00', 15, 5, 15, '12:00:00', '12:30:00', 360),
            (2, 'Shift 2', '22:00:00', '06:30:00', 15, 5, 15, '02:00:00', '02:30:00', 360);

        INSERT INTO employee (id, firstname, middlename, lastname, employeetypeid,
                              badgeid, shiftid, departmentid, active) VALUES
            (1, 'Joshua', 'E', 'Chapman', 1, '{DAY_BADGE}', 1, 1, '2017-02-02 00:00:00'),
            (2, 'Amie', 'D', 'Littell', 0, '{NIGHT_BADGE}', 2, 2, '2016-01-14 00:00:00');
        "#
    ))
    .expect("seed reference data");
}

/// Insert an event row directly, bypassing authorization.
pub fn insert_event(db_path: &str, badge_id: &str, timestamp: &str, terminal: i64, et: EventType) -> i64 {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute(
        "INSERT INTO event (badgeid, timestamp, terminalid, eventtypeid) VALUES (?1, ?2, ?3, ?4)",
        params![badge_id, timestamp, terminal, et.code()],
    )
    .expect("insert event");
    conn.last_insert_rowid()
}

pub fn count_events(db_path: &str) -> i64 {
    let conn = Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM event", [], |row| row.get(0))
        .expect("count events")
}

pub fn count_log_rows(db_path: &str, operation: &str) -> i64 {
    let conn = Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM log WHERE operation = ?1",
        [operation],
        |row| row.get(0),
    )
    .expect("count log rows")
}

pub fn badge(id: &str) -> Badge {
    let description = match id {
        DAY_BADGE => "Chapman, Joshua E",
        NIGHT_BADGE => "Littell, Amie D",
        _ => "Spare badge",
    };
    Badge::new(id, description)
}
