#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rsleepchart::SleepTable;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const LABELS: [&str; 3] = ["2024-01-01", "2024-01-02", "2024-01-03"];

/// Four event slots over three days, with one missing cell on day 3.
pub const SAMPLE_CSV: &str = "\
2024-01-01,2024-01-02,2024-01-03
e12:00am,e12:00am,e12:00am
b1:00am,a3:00am,a3:33am
s1:30am,b5:00am,
a9:00am,s5:20am,b10:00am
";

pub fn rsc() -> Command {
    cargo_bin_cmd!("rsleepchart")
}

/// Unique path inside the system temp dir; any existing file is removed.
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rsleepchart.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV fixture and return its path.
pub fn write_csv(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write csv fixture");
    path
}

/// Config path that does not exist yet, so defaults apply.
pub fn test_config(name: &str) -> String {
    temp_path(&format!("{name}_cfg"), "conf")
}

pub fn sample_table() -> SleepTable {
    SleepTable::from_grid(
        &LABELS,
        &[
            vec![Some("e12:00am"), Some("e12:00am"), Some("e12:00am")],
            vec![Some("b1:00am"), Some("a3:00am"), Some("a3:33am")],
            vec![Some("s1:30am"), Some("b5:00am"), None],
            vec![Some("a9:00am"), Some("s5:20am"), Some("b10:00am")],
        ],
    )
    .expect("sample table")
}
