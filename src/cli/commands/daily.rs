use crate::cli::parser::{Commands, DailyAction};
use crate::config::Config;
use crate::core::{listing, tracker};
use crate::db::Session;
use crate::errors::{AppError, AppResult};
use crate::models::DailyUpdate;
use crate::ui::{messages, render};
use crate::utils::date::{parse_date, today_string};

use super::{announce, pick_project, print_json};

/// `--date` as typed when it is a calendar date, today otherwise.
fn resolve_date(date: Option<&str>) -> AppResult<String> {
    match date.map(str::trim) {
        None | Some("") => Ok(today_string()),
        Some(d) => match parse_date(d) {
            Some(_) => Ok(d.to_string()),
            None => Err(AppError::InvalidDate(d.to_string())),
        },
    }
}

/// Handle the `daily` subcommands
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    let Commands::Daily { action } = cmd else {
        return Ok(());
    };

    match action {
        DailyAction::Add {
            date,
            project,
            developer,
            yesterday,
            today,
            blockers,
            milestone,
        } => {
            let date = resolve_date(date.as_deref())?;
            announce(session);

            let choices = tracker::project_choices(session.connection(), &cfg.fallback_projects);
            let update = DailyUpdate {
                date,
                project: pick_project(project.as_deref(), &choices),
                developer: developer.clone(),
                yesterday: yesterday.clone(),
                today: today.clone(),
                blockers: blockers.clone(),
                next_milestone: milestone.clone(),
                created_at: String::new(),
            };
            tracker::save(session.connection(), &update)?;
            messages::success(format!(
                "Daily update for {} on {} added",
                update.developer, update.date
            ));
        }

        DailyAction::List { json, limit } => {
            let rows: Vec<DailyUpdate> = tracker::load(session.connection());
            let recent =
                listing::recent_updates(rows, limit.unwrap_or(cfg.recent_updates_limit));
            if *json {
                return print_json(&recent);
            }
            announce(session);
            messages::header("Recent Daily Updates");
            if recent.is_empty() {
                messages::info("No daily updates yet.");
            } else {
                print!("{}", render::daily_updates(&recent));
            }
        }
    }

    Ok(())
}
