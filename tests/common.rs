#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::config::Config;
use rattendance::db::initialize::init_db;
use rattendance::db::pool::DbPool;
use rattendance::db::queries::insert_member;
use rattendance::models::member::Member;
use rattendance::models::role::Role;
use rattendance::models::shift::Shift;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Isolated workspace for one test: its own config file, roster DB and
/// ledgers directory inside the system temp dir.
pub struct TestSpace {
    pub dir: PathBuf,
    pub config: String,
}

pub fn setup_space(name: &str) -> TestSpace {
    let mut dir = env::temp_dir();
    dir.push(format!("{}_rattendance", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");
    let config = dir.join("rattendance.conf").to_string_lossy().to_string();
    TestSpace { dir, config }
}

pub fn init_space(space: &TestSpace) {
    rat()
        .args(["--config", &space.config, "init"])
        .assert()
        .success();
}

pub fn add_student_cli(space: &TestSpace, code: &str, first: &str, last: &str, cycle: &str, shift: &str, days: &str) {
    rat()
        .args([
            "--config", &space.config,
            "roster", "add", code,
            "--first", first,
            "--last", last,
            "--cycle", cycle,
            "--shift", shift,
            "--days", days,
        ])
        .assert()
        .success();
}

pub fn add_instructor_cli(space: &TestSpace, code: &str, first: &str, last: &str, days: &str) {
    rat()
        .args([
            "--config", &space.config,
            "roster", "add", code,
            "--first", first,
            "--last", last,
            "--role", "instructor",
            "--days", days,
        ])
        .assert()
        .success();
}

/// Library-level view over the same workspace, for tests that drive the
/// engine directly.
pub fn lib_config(space: &TestSpace) -> Config {
    Config::load(Some(&space.config)).expect("load test config")
}

pub fn lib_pool(cfg: &Config) -> DbPool {
    let pool = DbPool::new(&cfg.database).expect("open test db");
    init_db(&pool.conn).expect("init test db");
    pool
}

pub fn student(code: &str, first: &str, last: &str, cycle: &str, shift: Shift, days: &[&str]) -> Member {
    Member {
        code: code.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        role: Role::Student,
        cycle: Some(cycle.to_string()),
        shift: Some(shift),
        days: days.iter().map(|d| d.to_string()).collect(),
        active: true,
    }
}

pub fn instructor(code: &str, first: &str, last: &str, days: &[&str]) -> Member {
    Member {
        code: code.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        role: Role::Instructor,
        cycle: None,
        shift: None,
        days: days.iter().map(|d| d.to_string()).collect(),
        active: true,
    }
}

pub fn populate(pool: &mut DbPool, members: &[Member]) {
    for m in members {
        insert_member(pool, m).expect("insert member");
    }
}
