#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rwo() -> Command {
    let mut cmd = cargo_bin_cmd!("rworkout");
    // keep assertions free of ANSI codes and never touch the user's config
    cmd.env("NO_COLOR", "1");
    cmd.env("HOME", env::temp_dir());
    cmd
}

/// Create a temporary file path inside the system temp dir and remove any existing file
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworkout.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a fresh temporary input file and return its path
pub fn write_input(name: &str, ext: &str, content: &str) -> String {
    let path = temp_path(name, ext);
    fs::write(&path, content).expect("write input file");
    path
}

/// Float comparison with a tolerance suited to the formulas under test
pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
