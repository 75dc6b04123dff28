use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_instructor_cli, add_student_cli, init_space, rat, setup_space};

#[test]
fn init_creates_config_database_and_ledger_dir() {
    let space = setup_space("cli_init");

    rat()
        .args(["--config", &space.config, "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(space.dir.join("rattendance.conf").exists());
    assert!(space.dir.join("rattendance.sqlite").exists());
    assert!(space.dir.join("ledgers").exists());
}

#[test]
fn roster_add_and_list() {
    let space = setup_space("cli_roster");
    init_space(&space);

    add_student_cli(&space, "S1", "Ana", "Gomez", "7", "morning", "Mon,Wed");
    add_instructor_cli(&space, "I1", "Mara", "Reyes", "Mon,Tue,Wed,Thu,Fri");

    rat()
        .args(["--config", &space.config, "roster", "list"])
        .assert()
        .success()
        .stdout(contains("GOMEZ ANA"))
        .stdout(contains("REYES MARA"));
}

#[test]
fn roster_add_rejects_bad_shift_and_weekday() {
    let space = setup_space("cli_roster_bad");
    init_space(&space);

    rat()
        .args([
            "--config", &space.config,
            "roster", "add", "S1",
            "--first", "Ana",
            "--last", "Gomez",
            "--cycle", "7",
            "--shift", "evening",
            "--days", "Mon",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid shift"));

    rat()
        .args([
            "--config", &space.config,
            "roster", "add", "S1",
            "--first", "Ana",
            "--last", "Gomez",
            "--cycle", "7",
            "--shift", "morning",
            "--days", "Funday",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid weekday"));
}

#[test]
fn removed_member_disappears_from_default_listing() {
    let space = setup_space("cli_remove");
    init_space(&space);
    add_student_cli(&space, "S1", "Ana", "Gomez", "7", "morning", "Mon");

    rat()
        .args(["--config", &space.config, "roster", "remove", "S1"])
        .assert()
        .success();

    rat()
        .args(["--config", &space.config, "roster", "list"])
        .assert()
        .success()
        .stdout(contains("GOMEZ ANA").not());

    rat()
        .args(["--config", &space.config, "roster", "list", "--all"])
        .assert()
        .success()
        .stdout(contains("GOMEZ ANA"))
        .stdout(contains("[inactive]"));
}

#[test]
fn checkin_records_once_and_rejects_duplicates() {
    let space = setup_space("cli_checkin");
    init_space(&space);
    add_student_cli(&space, "S1", "Ana", "Gomez", "7", "morning", "Mon");

    rat()
        .args([
            "--config", &space.config,
            "checkin", "S1",
            "--date", "01-09-2025",
            "--time", "08:10",
        ])
        .assert()
        .success()
        .stdout(contains("Check-in recorded for S1 at 08:10 AM"));

    rat()
        .args([
            "--config", &space.config,
            "checkin", "S1",
            "--date", "01-09-2025",
            "--time", "09:00",
        ])
        .assert()
        .success()
        .stdout(contains("already registered today"));
}

#[test]
fn checkin_unknown_member_fails() {
    let space = setup_space("cli_checkin_unknown");
    init_space(&space);

    rat()
        .args([
            "--config", &space.config,
            "checkin", "GHOST",
            "--date", "01-09-2025",
            "--time", "08:10",
        ])
        .assert()
        .failure()
        .stderr(contains("Member not found"));
}

#[test]
fn show_prints_seeded_partition() {
    let space = setup_space("cli_show");
    init_space(&space);
    add_student_cli(&space, "S1", "Ana", "Gomez", "7", "morning", "Mon");
    add_student_cli(&space, "S2", "Luis", "Alva", "7", "morning", "Tue");

    rat()
        .args([
            "--config", &space.config,
            "checkin", "S1",
            "--date", "01-09-2025",
            "--time", "07:45",
        ])
        .assert()
        .success();

    rat()
        .args(["--config", &space.config, "show", "--date", "01-09-2025"])
        .assert()
        .success()
        .stdout(contains("Attendance ledger 01-09-2025"))
        .stdout(contains("CYCLE 7 - MORNING"))
        .stdout(contains("GOMEZ ANA"))
        .stdout(contains("07:45 AM"))
        .stdout(contains("NOT EXPECTED"));
}

#[test]
fn show_missing_day_fails_cleanly() {
    let space = setup_space("cli_show_missing");
    init_space(&space);

    rat()
        .args(["--config", &space.config, "show", "--date", "02-09-2025"])
        .assert()
        .failure()
        .stderr(contains("No ledger found for date 02-09-2025"));
}

#[test]
fn configured_schedule_drives_classification() {
    let space = setup_space("cli_schedule");
    init_space(&space);
    add_student_cli(&space, "S1", "Ana", "Gomez", "7", "morning", "Mon");

    rat()
        .args([
            "--config", &space.config,
            "config",
            "--shift", "morning",
            "--entry", "09:00",
            "--tolerance", "09:15",
        ])
        .assert()
        .success()
        .stdout(contains("Configuration updated"));

    rat()
        .args([
            "--config", &space.config,
            "checkin", "S1",
            "--date", "01-09-2025",
            "--time", "08:50",
        ])
        .assert()
        .success();

    let out = space.dir.join("on_time.json").to_string_lossy().to_string();
    rat()
        .args([
            "--config", &space.config,
            "export",
            "--format", "json",
            "--file", &out,
            "--date", "01-09-2025",
        ])
        .assert()
        .success();

    let json = std::fs::read_to_string(&out).expect("read export");
    assert!(json.contains("\"status\": \"on_time\""));
}

#[test]
fn log_records_engine_operations() {
    let space = setup_space("cli_log");
    init_space(&space);
    add_student_cli(&space, "S1", "Ana", "Gomez", "7", "morning", "Mon");

    rat()
        .args([
            "--config", &space.config,
            "checkin", "S1",
            "--date", "01-09-2025",
            "--time", "08:10",
        ])
        .assert()
        .success();

    rat()
        .args(["--config", &space.config, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("roster_add"))
        .stdout(contains("checkin"));
}

#[test]
fn backup_copies_database_and_ledgers() {
    let space = setup_space("cli_backup");
    init_space(&space);
    add_student_cli(&space, "S1", "Ana", "Gomez", "7", "morning", "Mon");

    rat()
        .args([
            "--config", &space.config,
            "checkin", "S1",
            "--date", "01-09-2025",
            "--time", "08:10",
        ])
        .assert()
        .success();

    let dest = space.dir.join("backup").to_string_lossy().to_string();
    rat()
        .args(["--config", &space.config, "backup", "--file", &dest, "-f"])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(space.dir.join("backup").join("rattendance.sqlite").exists());
    assert!(
        space
            .dir
            .join("backup")
            .join("ledgers")
            .join("01-09-2025.json")
            .exists()
    );
}
