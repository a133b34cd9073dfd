use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ServiceAccountKey;
use crate::ui::messages;
use std::fs;
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn edit(path: &Path, requested: Option<&str>) {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    match Command::new(&editor).arg(path).status() {
        Ok(s) if s.success() => {
            messages::success(format!("Configuration file edited using '{editor}'"));
        }
        _ if editor != fallback => {
            messages::warning(format!(
                "Editor '{editor}' not available, falling back to '{fallback}'"
            ));
            match Command::new(&fallback).arg(path).status() {
                Ok(s) if s.success() => {
                    messages::success(format!("Configuration file edited using '{fallback}'"))
                }
                _ => messages::error(format!("Failed to edit configuration with '{fallback}'")),
            }
        }
        _ => messages::error(format!("Failed to edit configuration with '{editor}'")),
    }
}

fn check(path: &Path, cfg: &Config) -> AppResult<()> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let missing = Config::missing_fields(&content)?;
        if missing.is_empty() {
            messages::success(format!("{}: all fields present", path.display()));
        } else {
            for field in missing {
                messages::warning(format!("Missing field '{field}' (default used)"));
            }
        }
    } else {
        messages::info(format!(
            "No configuration file at {}; defaults in use",
            path.display()
        ));
    }

    match ServiceAccountKey::discover(cfg.credentials_file.as_deref()) {
        Ok(Some(key)) => messages::success(format!("Credentials: {}", key.client_email)),
        Ok(None) => messages::warning("Google Cloud credentials not found"),
        Err(e) => messages::error(format!("{e}")),
    }
    Ok(())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check: check_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let nothing_requested = !(*print_config || *check_config || *edit_config);

    if *print_config || nothing_requested {
        println!("📄 {}\n", path.display());
        print!("{}", cfg.to_yaml()?);
    }

    if *check_config {
        check(path, cfg)?;
    }

    if *edit_config {
        edit(path, editor.as_deref());
    }

    Ok(())
}
