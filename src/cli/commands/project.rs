use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::core::tracker;
use crate::db::Session;
use crate::errors::AppResult;
use crate::models::Project;
use crate::ui::{messages, render};

use super::{announce, print_json};

/// Handle the `project` subcommands
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    let Commands::Project { action } = cmd else {
        return Ok(());
    };

    match action {
        ProjectAction::Add {
            name,
            goal,
            start,
            end,
            status,
            owners,
            notes,
        } => {
            announce(session);
            let project = Project {
                project: name.clone(),
                goal: goal.clone(),
                start_date: start.clone(),
                target_end_date: end.clone(),
                status: status.clone(),
                owners: owners.clone(),
                notes: notes.clone(),
                created_at: String::new(),
            };
            tracker::save(session.connection(), &project)?;
            messages::success(format!("Project '{}' added", project.project));
        }

        ProjectAction::List { json } => {
            let rows: Vec<Project> = tracker::load(session.connection());
            if *json {
                return print_json(&rows);
            }
            announce(session);
            messages::header("Project Overview");
            if rows.is_empty() {
                messages::info("No projects yet.");
            } else {
                print!("{}", render::projects(&rows));
            }
        }

        ProjectAction::Names => {
            for name in tracker::project_choices(session.connection(), &cfg.fallback_projects) {
                println!("{name}");
            }
        }
    }

    Ok(())
}
