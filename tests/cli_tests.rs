mod common;
use common::{SAMPLE_CSV, rsc, temp_path, test_config, write_csv};

use predicates::prelude::*;
use std::fs;
use std::path::Path;

#[test]
fn test_plot_writes_pdf() {
    let cfg = test_config("plot_pdf");
    let csv = write_csv("plot_pdf", SAMPLE_CSV);
    let out = temp_path("plot_pdf", "pdf");

    rsc()
        .args(["--config", &cfg, "plot", &csv, "--out", &out, "-f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF chart written"));

    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_plot_unknown_tag_fails_without_output() {
    let cfg = test_config("plot_unknown_tag");
    let csv = write_csv("plot_unknown_tag", "d1,d2\ne12:00am,e12:00am\nx1:00am,b2:00am\n");
    let out = temp_path("plot_unknown_tag", "pdf");

    rsc()
        .args(["--config", &cfg, "plot", &csv, "--out", &out, "-f"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No color configured for state tag 'x'"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_plot_malformed_cell_reports_position() {
    let cfg = test_config("plot_malformed");
    let csv = write_csv("plot_malformed", "d1,d2\ne12:00am,e12:00am\nb1:00am,b25:00am\n");
    let out = temp_path("plot_malformed", "pdf");

    rsc()
        .args(["--config", &cfg, "plot", &csv, "--out", &out, "-f"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timestamp 'b25:00am'"))
        .stderr(predicate::str::contains("row 2, column 2 (d2)"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_plot_missing_color_for_no_entry() {
    let cfg = test_config("plot_no_n_color");
    fs::write(&cfg, "colors:\n  e: white\n  b: gray\n").unwrap();
    let csv = write_csv("plot_no_n_color", "d1,d2\ne12:00am,e12:00am\nb1:00am,\n");
    let out = temp_path("plot_no_n_color", "pdf");

    rsc()
        .args(["--config", &cfg, "plot", &csv, "--out", &out, "-f"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("state tag 'n'"));
}

#[test]
fn test_export_csv_segments() {
    let cfg = test_config("export_csv");
    let csv = write_csv("export_csv_in", SAMPLE_CSV);
    let out = temp_path("export_csv_out", "csv");

    rsc()
        .args(["--config", &cfg, "export", &csv, "--format", "csv", "--out", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("day,slot,tag,state,event_time,stack_start,stack_end,duration_seconds,duration")
    );
    assert!(content.contains("2024-01-01,1,b,In bed,01:00AM,0,3600,3600,01:00"));
    assert!(content.contains("2024-01-03,2,n,No entry,,12780,12780,0,00:00"));
    assert_eq!(content.lines().count(), 1 + 12);
}

#[test]
fn test_export_json_with_wraparound_policy() {
    let cfg = test_config("export_json_wrap");
    let csv = write_csv("export_json_wrap", "d1\ns11:00pm\na1:00am\n");
    let out = temp_path("export_json_wrap", "json");

    rsc()
        .args([
            "--config", &cfg, "export", &csv, "--format", "json", "--out", &out, "--policy",
            "wraparound",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = value.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["duration_seconds"], 82_800);
    assert_eq!(rows[1]["duration_seconds"], 7200);
    assert_eq!(rows[1]["state"], "Awake");
}

#[test]
fn test_export_json_default_policy_is_absolute() {
    let cfg = test_config("export_json_abs");
    let csv = write_csv("export_json_abs", "d1\ns11:00pm\na1:00am\n");
    let out = temp_path("export_json_abs", "json");

    rsc()
        .args(["--config", &cfg, "export", &csv, "--format", "json", "--out", &out])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value[1]["duration_seconds"], 79_200);
}

#[test]
fn test_export_xlsx() {
    let cfg = test_config("export_xlsx");
    let csv = write_csv("export_xlsx", SAMPLE_CSV);
    let out = temp_path("export_xlsx", "xlsx");

    rsc()
        .args(["--config", &cfg, "export", &csv, "--format", "xlsx", "--out", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_list_prints_segments() {
    let cfg = test_config("list_all");
    let csv = write_csv("list_all", SAMPLE_CSV);

    rsc()
        .args(["--config", &cfg, "list", &csv])
        .assert()
        .success()
        .stdout(predicate::str::contains("In bed"))
        .stdout(predicate::str::contains("2024-01-02"))
        .stdout(predicate::str::contains("absolute durations"))
        .stdout(predicate::str::contains("12 segment(s)"));
}

#[test]
fn test_list_single_day() {
    let cfg = test_config("list_day");
    let csv = write_csv("list_day", SAMPLE_CSV);

    rsc()
        .args(["--config", &cfg, "list", &csv, "--day", "2024-01-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 segment(s)"))
        .stdout(predicate::str::contains("2024-01-01").not());

    rsc()
        .args(["--config", &cfg, "list", &csv, "--day", "nope"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No day labelled 'nope'"));
}

#[test]
fn test_input_from_configured_data_file() {
    let cfg = test_config("configured_input");
    let csv = write_csv("configured_input", SAMPLE_CSV);
    fs::write(&cfg, format!("data_file: {csv}\n")).unwrap();

    rsc()
        .args(["--config", &cfg, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("12 segment(s)"));
}

#[test]
fn test_missing_input_file_fails() {
    let cfg = test_config("missing_input");

    rsc()
        .args(["--config", &cfg, "list", "/definitely/not/here.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sleep table not found"));
}

#[test]
fn test_list_shows_stack_offsets_past_one_day() {
    let cfg = test_config("list_tall_bar");
    let csv = write_csv("list_tall_bar", "d1\ns11:00pm\na1:00am\n");

    rsc()
        .args(["--config", &cfg, "list", &csv])
        .assert()
        .success()
        .stdout(predicate::str::contains("45:00"))
        .stdout(predicate::str::contains("09:00PM").not());
}

#[test]
fn test_plot_refuses_directory_output() {
    let cfg = test_config("plot_dir_out");
    let csv = write_csv("plot_dir_out", SAMPLE_CSV);
    let dir = std::env::temp_dir();

    rsc()
        .args(["--config", &cfg, "plot", &csv, "--out", &dir.to_string_lossy(), "-f"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_export_into_missing_directory_fails() {
    let cfg = test_config("export_no_dir");
    let csv = write_csv("export_no_dir", SAMPLE_CSV);
    let out = std::env::temp_dir().join("rsleepchart_no_such_dir").join("out.csv");

    rsc()
        .args(["--config", &cfg, "export", &csv, "--out", &out.to_string_lossy()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_export_overwrite_needs_confirmation() {
    let cfg = test_config("export_confirm");
    let csv = write_csv("export_confirm", SAMPLE_CSV);
    let out = temp_path("export_confirm_out", "csv");
    fs::write(&out, "keep me\n").unwrap();

    rsc()
        .args(["--config", &cfg, "export", &csv, "--out", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSV segment export not written"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me\n");

    rsc()
        .args(["--config", &cfg, "export", &csv, "--out", &out])
        .write_stdin("y\n")
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("day,slot"));
}
