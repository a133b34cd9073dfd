//! Derived views used by forms and listings.

use crate::models::{DailyUpdate, Project};

pub const DEFAULT_RECENT_UPDATES: usize = 20;

/// Names offered by the project pickers, in sheet order; `fallback` when
/// the overview table is empty.
pub fn project_choices(projects: &[Project], fallback: &[String]) -> Vec<String> {
    let names: Vec<String> = projects.iter().map(|p| p.project.clone()).collect();
    if names.is_empty() {
        fallback.to_vec()
    } else {
        names
    }
}

/// Most recent `limit` updates by `Date`, newest first.
///
/// Dates are compared as strings; rows sharing a date keep their sheet order.
pub fn recent_updates(mut updates: Vec<DailyUpdate>, limit: usize) -> Vec<DailyUpdate> {
    updates.sort_by(|a, b| b.date.cmp(&a.date));
    updates.truncate(limit);
    updates
}
