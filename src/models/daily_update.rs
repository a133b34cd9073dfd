use super::record::{RawRecord, SheetRecord};
use crate::db::schema::Table;
use serde::Serialize;

/// One row of `Daily Updates`.
///
/// Column order: Date, Project, Developer, Yesterday's Progress,
/// Today's Focus, Blockers, Next Milestone, Created At.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DailyUpdate {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Developer")]
    pub developer: String,
    #[serde(rename = "Yesterday's Progress")]
    pub yesterday: String,
    #[serde(rename = "Today's Focus")]
    pub today: String,
    #[serde(rename = "Blockers")]
    pub blockers: String,
    #[serde(rename = "Next Milestone")]
    pub next_milestone: String,
    #[serde(rename = "Created At")]
    pub created_at: String,
}

impl DailyUpdate {
    /// Empty and `none` (any case) both mean nothing is blocking.
    pub fn is_blocked(&self) -> bool {
        let b = self.blockers.trim();
        !b.is_empty() && !b.eq_ignore_ascii_case("none")
    }
}

impl SheetRecord for DailyUpdate {
    const TABLE: Table = Table::DailyUpdates;

    fn from_raw(raw: &RawRecord) -> Self {
        Self {
            date: raw.get("Date").to_string(),
            project: raw.get("Project").to_string(),
            developer: raw.get("Developer").to_string(),
            yesterday: raw.get("Yesterday's Progress").to_string(),
            today: raw.get("Today's Focus").to_string(),
            blockers: raw.get("Blockers").to_string(),
            next_milestone: raw.get("Next Milestone").to_string(),
            created_at: raw.get("Created At").to_string(),
        }
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.project.clone(),
            self.developer.clone(),
            self.yesterday.clone(),
            self.today.clone(),
            self.blockers.clone(),
            self.next_milestone.clone(),
        ]
    }

    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![("Project", self.project.as_str()), ("Developer", self.developer.as_str())]
    }
}
