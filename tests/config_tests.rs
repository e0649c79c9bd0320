mod common;
use common::{rsc, test_config};

use predicates::prelude::*;
use rsleepchart::DurationPolicy;
use rsleepchart::config::Config;
use rsleepchart::config::check::check_config;
use std::fs;
use std::path::Path;

#[test]
fn test_init_writes_defaults() {
    let cfg = test_config("init_defaults");

    rsc().args(["--config", &cfg, "init"]).assert().success();

    let content = fs::read_to_string(&cfg).expect("config written");
    assert!(content.contains("duration_policy: absolute"));
    assert!(content.contains("days_per_page: 31"));

    // a second init leaves the file alone
    fs::write(&cfg, "chart_title: Mine\n").unwrap();
    rsc()
        .args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&cfg).unwrap(), "chart_title: Mine\n");
}

#[test]
fn test_config_print() {
    let cfg = test_config("config_print");

    rsc()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chart_title: Sleep log"))
        .stdout(predicate::str::contains("n: silver"));
}

#[test]
fn test_config_check_reports_missing_fields() {
    let cfg = test_config("config_check");
    fs::write(&cfg, "chart_title: Mine\n").unwrap();

    rsc()
        .args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("missing field 'colors'"))
        .stderr(predicate::str::contains("missing field 'chart_title'").not());
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let cfg = test_config("config_partial");
    fs::write(&cfg, "duration_policy: wraparound\ndays_per_page: 7\n").unwrap();

    let loaded = Config::load(Path::new(&cfg)).unwrap();
    assert_eq!(loaded.duration_policy, DurationPolicy::Wraparound);
    assert_eq!(loaded.days_per_page, 7);
    assert_eq!(loaded.chart_title, "Sleep log");
    assert_eq!(loaded.colors, Config::default().colors);
}

#[test]
fn test_check_flags_invalid_values() {
    let cfg = test_config("config_invalid");
    fs::write(
        &cfg,
        "delimiter: ';;'\ndays_per_page: 0\ncolors:\n  b: gray\n",
    )
    .unwrap();

    let loaded = Config::load(Path::new(&cfg)).unwrap();
    let issues = check_config(Path::new(&cfg), &loaded).unwrap();

    assert!(issues.iter().any(|i| i.contains("delimiter")));
    assert!(issues.iter().any(|i| i.contains("days_per_page")));
    assert!(issues.iter().any(|i| i.contains("tag 'n'")));
}

#[test]
fn test_delimiter_aliases() {
    let mut cfg = Config::default();
    assert_eq!(cfg.delimiter_byte().unwrap(), b',');

    cfg.delimiter = "tab".into();
    assert_eq!(cfg.delimiter_byte().unwrap(), b'\t');

    cfg.delimiter = ";".into();
    assert_eq!(cfg.delimiter_byte().unwrap(), b';');
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let cfg = test_config("config_bad_yaml");
    fs::write(&cfg, "days_per_page: [not a number\n").unwrap();

    rsc()
        .args(["--config", &cfg, "config", "--print"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration file"));
}
