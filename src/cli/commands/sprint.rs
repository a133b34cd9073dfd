use crate::cli::parser::{Commands, SprintAction};
use crate::config::Config;
use crate::core::tracker;
use crate::db::Session;
use crate::errors::AppResult;
use crate::models::SprintGoal;
use crate::ui::{messages, render};

use super::{announce, pick_project, print_json};

/// Handle the `sprint` subcommands
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut Session) -> AppResult<()> {
    let Commands::Sprint { action } = cmd else {
        return Ok(());
    };

    match action {
        SprintAction::Add {
            sprint,
            dates,
            project,
            goal,
            criteria,
            owners,
            status,
        } => {
            announce(session);
            let choices = tracker::project_choices(session.connection(), &cfg.fallback_projects);
            let goal = SprintGoal {
                sprint: sprint.clone(),
                dates: dates.clone(),
                project: pick_project(project.as_deref(), &choices),
                goal: goal.clone(),
                success_criteria: criteria.clone(),
                owners: owners.clone(),
                status: status.clone(),
                created_at: String::new(),
            };
            tracker::save(session.connection(), &goal)?;
            messages::success(format!("Sprint goal for {} added", goal.sprint));
        }

        SprintAction::List { json } => {
            let rows: Vec<SprintGoal> = tracker::load(session.connection());
            if *json {
                return print_json(&rows);
            }
            announce(session);
            messages::header("Sprint Goals");
            if rows.is_empty() {
                messages::info("No sprint goals yet.");
            } else {
                print!("{}", render::sprint_goals(&rows));
            }
        }
    }

    Ok(())
}
