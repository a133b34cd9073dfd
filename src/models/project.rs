use super::record::{RawRecord, SheetRecord};
use super::status::Status;
use crate::db::schema::Table;
use serde::Serialize;

/// One row of `Project Overview`.
///
/// Column order: Project, Goal, Start Date, Target End Date, Current Status,
/// Owner(s), Notes, Created At.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Project {
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Goal")]
    pub goal: String,
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "Target End Date")]
    pub target_end_date: String,
    #[serde(rename = "Current Status")]
    pub status: String,
    #[serde(rename = "Owner(s)")]
    pub owners: String,
    #[serde(rename = "Notes")]
    pub notes: String,
    #[serde(rename = "Created At")]
    pub created_at: String,
}

impl Project {
    pub fn current_status(&self) -> Status {
        Status::parse(&self.status)
    }
}

impl SheetRecord for Project {
    const TABLE: Table = Table::ProjectOverview;

    fn from_raw(raw: &RawRecord) -> Self {
        Self {
            project: raw.get("Project").to_string(),
            goal: raw.get("Goal").to_string(),
            start_date: raw.get("Start Date").to_string(),
            target_end_date: raw.get("Target End Date").to_string(),
            status: raw.get("Current Status").to_string(),
            owners: raw.get("Owner(s)").to_string(),
            notes: raw.get("Notes").to_string(),
            created_at: raw.get("Created At").to_string(),
        }
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.project.clone(),
            self.goal.clone(),
            self.start_date.clone(),
            self.target_end_date.clone(),
            self.status.clone(),
            self.owners.clone(),
            self.notes.clone(),
        ]
    }

    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![("Project", self.project.as_str()), ("Goal", self.goal.as_str())]
    }
}
