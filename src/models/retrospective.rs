use super::record::{RawRecord, SheetRecord};
use crate::db::schema::Table;
use serde::Serialize;

/// One row of `Results & Retrospective`.
///
/// Column order: Sprint, What Went Well, What Could Be Better, Key Results,
/// Created At.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Retrospective {
    #[serde(rename = "Sprint")]
    pub sprint: String,
    #[serde(rename = "What Went Well")]
    pub went_well: String,
    #[serde(rename = "What Could Be Better")]
    pub could_be_better: String,
    #[serde(rename = "Key Results")]
    pub key_results: String,
    #[serde(rename = "Created At")]
    pub created_at: String,
}

impl SheetRecord for Retrospective {
    const TABLE: Table = Table::Retrospective;

    fn from_raw(raw: &RawRecord) -> Self {
        Self {
            sprint: raw.get("Sprint").to_string(),
            went_well: raw.get("What Went Well").to_string(),
            could_be_better: raw.get("What Could Be Better").to_string(),
            key_results: raw.get("Key Results").to_string(),
            created_at: raw.get("Created At").to_string(),
        }
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.sprint.clone(),
            self.went_well.clone(),
            self.could_be_better.clone(),
            self.key_results.clone(),
        ]
    }

    fn required(&self) -> Vec<(&'static str, &str)> {
        vec![("Sprint", self.sprint.as_str())]
    }
}
