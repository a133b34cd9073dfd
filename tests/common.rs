#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary with no credentials in reach.
pub fn st() -> Command {
    let mut cmd = cargo_bin_cmd!("sprint-tracker");
    cmd.env_remove("SPRINT_TRACKER_SERVICE_ACCOUNT")
        .env("RUST_LOG", "off");
    cmd
}

/// A config path inside the temp dir, removed if a previous run left it behind.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{name}_sprinttracker.conf"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` as the config file for `name` and return its path.
pub fn write_config(name: &str, content: &str) -> String {
    let p = temp_config(name);
    fs::write(&p, content).expect("write config");
    p
}
