pub mod config;
pub mod daily;
pub mod init;
pub mod project;
pub mod retro;
pub mod sprint;
pub mod status;

use crate::db::{Connection, Session};
use crate::errors::AppResult;
use crate::ui::{messages, render};
use serde::Serialize;

/// Print what the user should know about the connection before a form or listing.
pub fn announce(session: &Session) {
    match session.connection() {
        Connection::Online(handle) => render::origin_notice(handle),
        Connection::Offline(reason) => render::offline_notice(reason),
    }
}

pub fn print_json<T: Serialize>(rows: &[T]) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

/// Resolve the project of a form: the first choice when none was given,
/// anything else is accepted with a note when it is not a known project.
pub fn pick_project(given: Option<&str>, choices: &[String]) -> String {
    match given {
        None => choices.first().cloned().unwrap_or_default(),
        Some(name) => {
            if !choices.iter().any(|c| c == name) {
                messages::info(format!("'{name}' is not in the project list; saving it as typed"));
            }
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_defaults_to_first_choice() {
        let choices = vec!["Beehiiv + TinyEmail".to_string(), "Slack AI Assistant".to_string()];
        assert_eq!(pick_project(None, &choices), "Beehiiv + TinyEmail");
        assert_eq!(pick_project(Some("Slack AI Assistant"), &choices), "Slack AI Assistant");
        assert_eq!(pick_project(Some("Side Quest"), &choices), "Side Quest");
        assert_eq!(pick_project(None, &[]), "");
    }
}
