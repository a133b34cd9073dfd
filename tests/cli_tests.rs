use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{st, temp_config, write_config};

#[test]
fn test_missing_credentials_runs_in_demo_mode() {
    let cfg = temp_config("demo_mode");

    st().args(["--config", &cfg, "project", "list"])
        .assert()
        .success()
        .stdout(contains("Google Cloud credentials not found"))
        .stdout(contains("Running in demo mode"))
        .stdout(contains("No projects yet."));
}

#[test]
fn test_offline_save_is_refused() {
    let cfg = temp_config("offline_save");

    st().args([
        "--config", &cfg, "--offline", "retro", "add", "--sprint", "Sprint 2",
    ])
    .assert()
    .failure()
    .stderr(contains("Google Sheets not connected. Data not saved."));
}

#[test]
fn test_offline_daily_list_is_empty_json() {
    let cfg = temp_config("offline_json");

    st().args(["--config", &cfg, "--offline", "daily", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("[]"))
        .stdout(contains("demo mode").not());
}

#[test]
fn test_missing_required_fields_are_reported() {
    let cfg = temp_config("validation");

    st().args(["--config", &cfg, "--sandbox", "project", "add", "--name", "Half"])
        .assert()
        .failure()
        .stderr(contains("Please fill in Project and Goal fields"));

    st().args(["--config", &cfg, "--sandbox", "sprint", "add", "--goal", "Ship"])
        .assert()
        .failure()
        .stderr(contains("Please fill in Sprint, Project, and Goal fields"));
}

#[test]
fn test_invalid_daily_date_is_rejected() {
    let cfg = temp_config("bad_date");

    st().args([
        "--config", &cfg, "--sandbox", "daily", "add", "--date", "2025-13-01", "--developer",
        "Andre",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid date format: 2025-13-01"));
}

#[test]
fn test_sandbox_is_seeded_with_samples() {
    let cfg = temp_config("sandbox_seed");

    st().args(["--config", &cfg, "--sandbox", "project", "list"])
        .assert()
        .success()
        .stdout(contains("Created spreadsheet 'Sprint Tracker Data'"))
        .stdout(contains("Beehiiv + TinyEmail Automation"))
        .stdout(contains("[On Hold]"));

    st().args(["--config", &cfg, "--sandbox", "daily", "list"])
        .assert()
        .success()
        .stdout(contains("Need API keys from client"))
        .stdout(contains("Blockers:"));

    st().args(["--config", &cfg, "--sandbox", "retro", "list"])
        .assert()
        .success()
        .stdout(contains("Sprint 1"))
        .stdout(contains("Automation working daily"));
}

#[test]
fn test_sandbox_json_uses_column_names() {
    let cfg = temp_config("sandbox_json");

    st().args(["--config", &cfg, "--sandbox", "sprint", "list", "--json"])
        .assert()
        .success()
        .stdout(contains("\"Success Criteria\": \"Answers accurate within ±10%\""))
        .stdout(contains("\"Created At\""));
}

#[test]
fn test_daily_limit_trims_listing() {
    let cfg = temp_config("daily_limit");

    st().args(["--config", &cfg, "--sandbox", "daily", "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("Slackbot responds"))
        .stdout(contains("Explored TinyEmail docs").not());
}

#[test]
fn test_sandbox_add_succeeds() {
    let cfg = temp_config("sandbox_add");

    st().args([
        "--config", &cfg, "--sandbox", "daily", "add", "--project", "Slack AI Assistant",
        "--developer", "Partner", "--today", "Write listener tests",
    ])
    .assert()
    .success()
    .stdout(contains("Daily update for Partner on"));

    st().args([
        "--config", &cfg, "--sandbox", "project", "add", "--name", "Billing Revamp", "--goal",
        "Stripe invoices", "--status", "Planned",
    ])
    .assert()
    .success()
    .stdout(contains("Project 'Billing Revamp' added"));
}

#[test]
fn test_project_names_fall_back_offline() {
    let cfg = write_config(
        "names_fallback",
        "fallback_projects:\n  - Alpha\n  - Beta\n",
    );

    st().args(["--config", &cfg, "--offline", "project", "names"])
        .assert()
        .success()
        .stdout(contains("Alpha\nBeta\n"));
}

#[test]
fn test_status_reports_sandbox_url_and_refresh() {
    let cfg = temp_config("status");

    st().args(["--config", &cfg, "--sandbox", "status", "--refresh"])
        .assert()
        .success()
        .stdout(contains("Connected to Google Sheets: Sprint Tracker Data"))
        .stdout(contains("memory://"))
        .stdout(contains("Connection #2"));
}

#[test]
fn test_config_print_and_check() {
    let cfg = write_config("config_check", "spreadsheet_name: Team Board\n");

    st().args(["--config", &cfg, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("spreadsheet_name: Team Board"))
        .stdout(contains("recent_updates_limit: 20"));

    st().args(["--config", &cfg, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing field 'share_with'"))
        .stdout(contains("Google Cloud credentials not found"));
}

#[test]
fn test_malformed_config_fails() {
    let cfg = write_config("config_bad", "recent_updates_limit: [oops\n");

    st().args(["--config", &cfg, "--offline", "daily", "list"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_unknown_status_is_rejected_by_parser() {
    st().args(["--offline", "project", "add", "--status", "Someday"])
        .assert()
        .failure()
        .stderr(contains("invalid value"));
}

#[test]
fn test_init_offline_only_warns() {
    let cfg = temp_config("init_offline");

    st().args(["--config", &cfg, "init"])
        .assert()
        .success()
        .stdout(contains("Running in demo mode"));
}
