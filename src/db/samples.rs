//! Rows written into a freshly created spreadsheet so the listings are not empty.

use super::schema::Table;

const PROJECTS: &[[&str; 7]] = &[
    [
        "Beehiiv + TinyEmail Automation",
        "Automate daily campaign stats to Sheets",
        "Aug 28",
        "Sept 6",
        "In Progress",
        "Andre, Partner",
        "Roadmap drafted, API research ongoing",
    ],
    [
        "Slack AI Assistant",
        "AI chatbot with doc parsing",
        "Sept 7",
        "Sept 15",
        "On Hold",
        "Andre",
        "Waiting for client feedback",
    ],
];

const DAILY_UPDATES: &[[&str; 7]] = &[
    [
        "2025-08-27",
        "Beehiiv + TinyEmail",
        "Andre",
        "Finished roadmap & doc",
        "Start API auth setup",
        "Need API keys from client",
        "API connector working",
    ],
    [
        "2025-08-27",
        "Beehiiv + TinyEmail",
        "Partner",
        "Explored TinyEmail docs",
        "Build Beehiiv client prototype",
        "None",
        "End-to-end test for 1 brand",
    ],
    [
        "2025-08-28",
        "Slack AI Assistant",
        "Andre",
        "Setup Flask skeleton",
        "Write Slackbot listener",
        "None",
        "Slackbot responds to `/ask`",
    ],
];

const SPRINT_GOALS: &[[&str; 7]] = &[
    [
        "Sprint 1",
        "Aug 27–Sept 6",
        "Beehiiv + TinyEmail",
        "Automated ingestion & write to Sheets",
        "Job runs daily at 8am PH time with alerts",
        "Andre, Partner",
        "In Progress",
    ],
    [
        "Sprint 2",
        "Sept 7–Sept 15",
        "Slack AI Assistant",
        "Slackbot answers questions from uploaded docs",
        "Answers accurate within ±10%",
        "Andre",
        "Planned",
    ],
];

const RETROSPECTIVES: &[[&str; 4]] = &[[
    "Sprint 1",
    "Clear roadmap, strong API division",
    "Client was slow with credentials",
    "Automation working daily",
]];

fn stamped<const N: usize>(rows: &[[&str; N]], stamp: &str) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            r.iter()
                .map(|s| s.to_string())
                .chain(std::iter::once(stamp.to_string()))
                .collect()
        })
        .collect()
}

/// Sample rows for `table`, each ending with `stamp` as its `Created At`.
pub fn rows_for(table: Table, stamp: &str) -> Vec<Vec<String>> {
    match table {
        Table::ProjectOverview => stamped(PROJECTS, stamp),
        Table::DailyUpdates => stamped(DAILY_UPDATES, stamp),
        Table::SprintGoals => stamped(SPRINT_GOALS, stamp),
        Table::Retrospective => stamped(RETROSPECTIVES, stamp),
    }
}
