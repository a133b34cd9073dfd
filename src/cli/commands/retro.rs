use crate::cli::parser::{Commands, RetroAction};
use crate::core::tracker;
use crate::db::Session;
use crate::errors::AppResult;
use crate::models::Retrospective;
use crate::ui::{messages, render};

use super::{announce, print_json};

/// Handle the `retro` subcommands
pub fn handle(cmd: &Commands, session: &mut Session) -> AppResult<()> {
    let Commands::Retro { action } = cmd else {
        return Ok(());
    };

    match action {
        RetroAction::Add {
            sprint,
            went_well,
            could_be_better,
            key_results,
        } => {
            announce(session);
            let retro = Retrospective {
                sprint: sprint.clone(),
                went_well: went_well.clone(),
                could_be_better: could_be_better.clone(),
                key_results: key_results.clone(),
                created_at: String::new(),
            };
            tracker::save(session.connection(), &retro)?;
            messages::success(format!("Retrospective for {} added", retro.sprint));
        }

        RetroAction::List { json } => {
            let rows: Vec<Retrospective> = tracker::load(session.connection());
            if *json {
                return print_json(&rows);
            }
            announce(session);
            messages::header("Results & Retrospective");
            if rows.is_empty() {
                messages::info("No retrospectives yet.");
            } else {
                print!("{}", render::retrospectives(&rows));
            }
        }
    }

    Ok(())
}
