use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::*;

fn init(db_path: &str) {
    tas()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

/// `init` through the CLI, then load reference rows.
fn init_with_data(db_path: &str) {
    init(db_path);
    seed_reference_data(db_path);
}

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("cli_init");
    init(&db_path);

    tas()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied").not());
}

#[test]
fn test_punch_on_department_terminal() {
    let db_path = setup_test_db("cli_punch_ok");
    init_with_data(&db_path);

    tas()
        .args([
            "--db",
            &db_path,
            "punch",
            "--badge",
            DAY_BADGE,
            "--terminal",
            "5",
            "--type",
            "in",
            "--at",
            "2018-09-05 07:00:07",
        ])
        .assert()
        .success()
        .stdout(contains("recorded"))
        .stdout(contains("CLOCK IN: WED 09/05/2018 07:00:07"));

    assert_eq!(count_events(&db_path), 1);
    assert_eq!(count_log_rows(&db_path, "punch"), 1);
}

#[test]
fn test_punch_on_foreign_terminal_is_rejected() {
    let db_path = setup_test_db("cli_punch_rejected");
    init_with_data(&db_path);

    tas()
        .args([
            "--db",
            &db_path,
            "punch",
            "--badge",
            DAY_BADGE,
            "--terminal",
            "9",
            "--type",
            "out",
            "--at",
            "2018-09-05 15:30:00",
        ])
        .assert()
        .success()
        .stdout(contains("Punch rejected"));

    assert_eq!(count_events(&db_path), 0);
    assert_eq!(count_log_rows(&db_path, "punch_rejected"), 1);
}

#[test]
fn test_punch_with_invalid_type_fails() {
    let db_path = setup_test_db("cli_punch_bad_type");
    init_with_data(&db_path);

    tas()
        .args([
            "--db", &db_path, "punch", "--badge", DAY_BADGE, "--terminal", "5", "--type", "lunch",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid event type"));
}

#[test]
fn test_punch_with_unknown_badge_fails() {
    let db_path = setup_test_db("cli_punch_unknown_badge");
    init_with_data(&db_path);

    tas()
        .args([
            "--db", &db_path, "punch", "--badge", "FFFFFFFF", "--terminal", "0", "--type", "in",
        ])
        .assert()
        .failure()
        .stderr(contains("Not found"));
}

#[test]
fn test_day_lists_punches_as_json() {
    let db_path = setup_test_db("cli_day_json");
    init_with_data(&db_path);

    insert_event(&db_path, NIGHT_BADGE, "2018-09-05 22:00:00", 9, tasclock::models::EventType::ClockIn);
    insert_event(&db_path, NIGHT_BADGE, "2018-09-06 06:30:00", 9, tasclock::models::EventType::ClockOut);

    tas()
        .args(["--db", &db_path, "day", "--badge", NIGHT_BADGE, "--date", "2018-09-05", "--json"])
        .assert()
        .success()
        .stdout(contains("\"ClockIn\""))
        .stdout(contains("\"ClockOut\""))
        .stdout(contains("2018-09-06T06:30:00"));
}

#[test]
fn test_day_without_punches() {
    let db_path = setup_test_db("cli_day_empty");
    init_with_data(&db_path);

    tas()
        .args(["--db", &db_path, "day", "--badge", DAY_BADGE, "--date", "2018-09-05"])
        .assert()
        .success()
        .stdout(contains("No punches"));
}

#[test]
fn test_show_punch() {
    let db_path = setup_test_db("cli_show");
    init_with_data(&db_path);

    let id = insert_event(&db_path, DAY_BADGE, "2018-09-07 06:50:35", 5, tasclock::models::EventType::ClockIn);

    tas()
        .args(["--db", &db_path, "show", &id.to_string()])
        .assert()
        .success()
        .stdout(contains(format!("#{} CLOCK IN: FRI 09/07/2018 06:50:35", DAY_BADGE)));

    tas()
        .args(["--db", &db_path, "show", "999"])
        .assert()
        .failure()
        .stderr(contains("punch #999"));
}

#[test]
fn test_range_is_empty() {
    let db_path = setup_test_db("cli_range");
    init_with_data(&db_path);

    insert_event(&db_path, DAY_BADGE, "2018-09-05 07:00:00", 5, tasclock::models::EventType::ClockIn);

    tas()
        .args([
            "--db", &db_path, "range", "--badge", DAY_BADGE, "--from", "2018-09-01", "--to", "2018-09-30",
        ])
        .assert()
        .success()
        .stdout(contains("No punches"));
}

#[test]
fn test_employee_by_badge() {
    let db_path = setup_test_db("cli_employee");
    init_with_data(&db_path);

    tas()
        .args(["--db", &db_path, "employee", "--badge", NIGHT_BADGE])
        .assert()
        .success()
        .stdout(contains("ID #2: Littell, Amie D"))
        .stdout(contains("Part-Time"))
        .stdout(contains("Terminal ID: 9"));

    tas()
        .args(["--db", &db_path, "employee"])
        .assert()
        .failure();
}

#[test]
fn test_log_print() {
    let db_path = setup_test_db("cli_log");
    init(&db_path);

    tas()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"));
}
