//! Text renderings of the four listings and of the connection state.

use crate::db::{Connection, Origin, ShareOutcome, StoreHandle};
use crate::errors::ConnectionError;
use crate::models::{DailyUpdate, Project, Retrospective, SprintGoal};
use crate::ui::messages;
use crate::utils::colors::{self, GREEN, RED, colorize_optional, paint};
use crate::utils::formatting::{bold, italic};
use crate::utils::table::{Column, Table};

const TBD: &str = "TBD";

pub fn projects(rows: &[Project]) -> String {
    let mut table = Table::new(vec![
        Column::new("Project", 32),
        Column::new("Goal", 36),
        Column::new("Start", 10),
        Column::new("Target End", 10),
        Column::new("Status", 20),
        Column::new("Owner(s)", 16),
        Column::new("Notes", 32),
    ]);
    for p in rows {
        table.add_row(vec![
            bold(&p.project),
            p.goal.clone(),
            colorize_optional(&p.start_date, "-"),
            colorize_optional(&p.target_end_date, "-"),
            p.current_status().badge(),
            colorize_optional(&p.owners, "-"),
            p.notes.clone(),
        ]);
    }
    table.render()
}

pub fn sprint_goals(rows: &[SprintGoal]) -> String {
    let mut table = Table::new(vec![
        Column::new("Sprint", 10),
        Column::new("Dates", 16),
        Column::new("Project", 22),
        Column::new("Goal", 32),
        Column::new("Success Criteria", 32),
        Column::new("Owner(s)", 16),
        Column::new("Status", 20),
    ]);
    for g in rows {
        table.add_row(vec![
            bold(&g.sprint),
            colorize_optional(&g.dates, "-"),
            g.project.clone(),
            g.goal.clone(),
            colorize_optional(&g.success_criteria, "-"),
            colorize_optional(&g.owners, "-"),
            g.current_status().badge(),
        ]);
    }
    table.render()
}

fn blockers(update: &DailyUpdate) -> String {
    if update.is_blocked() {
        paint(RED, update.blockers.trim())
    } else {
        paint(GREEN, "None")
    }
}

/// One block per update; `updates` is expected in display order already.
pub fn daily_updates(updates: &[DailyUpdate]) -> String {
    let mut out = String::new();
    for u in updates {
        out.push_str(&format!(
            "{}  {}  {}\n",
            bold(&u.date),
            paint(colors::CYAN, &u.project),
            italic(&u.developer)
        ));
        out.push_str(&format!("  Yesterday:  {}\n", colorize_optional(&u.yesterday, "-")));
        out.push_str(&format!("  Today:      {}\n", colorize_optional(&u.today, "-")));
        out.push_str(&format!("  Blockers:   {}\n", blockers(u)));
        out.push_str(&format!(
            "  Milestone:  {}\n\n",
            colorize_optional(&u.next_milestone, "-")
        ));
    }
    out
}

fn or_tbd(value: &str) -> String {
    if value.trim().is_empty() {
        TBD.to_string()
    } else {
        value.to_string()
    }
}

pub fn retrospectives(rows: &[Retrospective]) -> String {
    let mut out = String::new();
    for r in rows {
        out.push_str(&format!("{}\n", bold(&r.sprint)));
        out.push_str(&format!("  Went well:       {}\n", or_tbd(&r.went_well)));
        out.push_str(&format!("  Could be better: {}\n", or_tbd(&r.could_be_better)));
        out.push_str(&format!("  Key results:     {}\n\n", or_tbd(&r.key_results)));
    }
    out
}

pub const QUOTA_HINTS: [&str; 3] = [
    "Delete unused files from the service account's Drive",
    "Create the spreadsheet by hand and share it with the service account",
    "Use a service account from another Google Cloud project",
];

/// Tell the user why there is no connection and what still works.
pub fn offline_notice(reason: &ConnectionError) {
    match reason {
        ConnectionError::CredentialsMissing => {
            messages::warning("Google Cloud credentials not found.");
            messages::info(format!(
                "Set {} to the service account JSON, or point credentials_file at the key file.",
                crate::store::credentials::CREDENTIALS_ENV
            ));
        }
        ConnectionError::QuotaExceeded => {
            messages::error("Google Drive storage quota exceeded for the service account.");
            for hint in QUOTA_HINTS {
                messages::info(hint);
            }
        }
        ConnectionError::Disabled => {}
        ConnectionError::Unknown(msg) => messages::error(format!("Connection error: {msg}")),
    }
    messages::info("Running in demo mode. Nothing will be saved.");
}

/// Notices about a spreadsheet created during this connection.
pub fn origin_notice(handle: &StoreHandle) {
    if let Origin::Created { share } = handle.origin() {
        messages::success(format!(
            "Created spreadsheet '{}' with sample data",
            handle.collection().title
        ));
        match share {
            ShareOutcome::Shared(email) => messages::info(format!("Shared with {email}")),
            ShareOutcome::Failed(e) => messages::warning(format!("{e}")),
            ShareOutcome::NotConfigured => {}
        }
    }
}

pub fn connection_status(conn: &Connection) {
    match conn {
        Connection::Online(handle) => {
            messages::success(format!(
                "Connected to Google Sheets: {}",
                handle.collection().title
            ));
            messages::info(format!("Open spreadsheet: {}", handle.url()));
        }
        Connection::Offline(reason) => offline_notice(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::strip_ansi;

    #[test]
    fn blockers_none_and_empty_read_as_none() {
        let mut u = DailyUpdate {
            date: "2025-08-27".into(),
            project: "Beehiiv + TinyEmail".into(),
            developer: "Partner".into(),
            blockers: "none".into(),
            ..Default::default()
        };
        let text = strip_ansi(&daily_updates(std::slice::from_ref(&u)));
        assert!(text.contains("Blockers:   None"));

        u.blockers.clear();
        assert!(strip_ansi(&daily_updates(std::slice::from_ref(&u))).contains("Blockers:   None"));

        u.blockers = "Need API keys from client".into();
        let text = daily_updates(&[u]);
        assert!(text.contains(&paint(RED, "Need API keys from client")));
    }

    #[test]
    fn empty_retro_fields_show_tbd() {
        let text = strip_ansi(&retrospectives(&[Retrospective {
            sprint: "Sprint 2".into(),
            went_well: "Pairing".into(),
            ..Default::default()
        }]));
        assert!(text.contains("Went well:       Pairing"));
        assert!(text.contains("Could be better: TBD"));
        assert!(text.contains("Key results:     TBD"));
    }

    #[test]
    fn project_table_shows_status_text() {
        let text = strip_ansi(&projects(&[Project {
            project: "Slack AI Assistant".into(),
            goal: "AI chatbot".into(),
            status: "Waiting On Client".into(),
            ..Default::default()
        }]));
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with("Project"));
        assert!(lines.next().unwrap().starts_with("---"));
        let row = lines.next().unwrap();
        assert!(row.contains("Slack AI Assistant"));
        assert!(row.contains("[Waiting On Client]"));
    }

    #[test]
    fn sprint_table_has_one_line_per_short_row() {
        let rows = vec![
            SprintGoal {
                sprint: "Sprint 1".into(),
                project: "A".into(),
                goal: "G".into(),
                status: "Planned".into(),
                ..Default::default()
            },
            SprintGoal {
                sprint: "Sprint 2".into(),
                project: "B".into(),
                goal: "H".into(),
                status: "In Progress".into(),
                ..Default::default()
            },
        ];
        assert_eq!(sprint_goals(&rows).lines().count(), 4);
    }
}
