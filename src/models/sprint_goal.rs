use super::record::{RawRecord, SheetRecord};
use super::status::Status;
use crate::db::schema::Table;
use serde::Serialize;

/// One row of `Sprint Goals`.
///
/// Column order: Sprint, Dates, Project, Goal, Success Criteria, Owner(s),
/// Status, Created At.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SprintGoal {
    #[serde(rename = "Sprint")]
    pub sprint: String,
    #[serde(rename = "Dates")]
    pub dates: String,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Goal")]
    pub goal: String,
    #[serde(rename = "Success Criteria")]
    pub success_criteria: String,
    #[serde(rename = "Owner(s)")]
    pub owners: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Created At")]
    pub created_at: String,
}

impl SprintGoal {
    pub fn current_status(&self) -> Status {
        Status::parse(&self.status)
    }
}

impl SheetRecord for SprintGoal {
    const TABLE: Table = Table::SprintGoals;

    fn from_raw(raw: &RawRecord) -> Self {
        Self {
            sprint: raw.get("Sprint").to_string(),
            dates: raw.get("Dates").to_string(),
            project: raw.get("Project").to_string(),
            goal: raw.get("Goal").to_string(),
            success_criteria: raw.get("Success Criteria").to_string(),
            owners: raw.get("Owner(s)").to_string(),
            status: raw.get("Status").to_string(),
            created_at: raw.get("Created At").to_string(),
        }
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.sprint.clone(),
            self.dates.clone(),
            self.project.clone(),
            self.goal.clone(),
            self.success_criteria.clone(),
            self.owners.clone(),
            self.status.clone(),
        ]
    }

    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Sprint", self.sprint.as_str()),
            ("Project", self.project.as_str()),
            ("Goal", self.goal.as_str()),
        ]
    }
}
