//! The four worksheets and their fixed headers.
//!
//! `ensure_schema` creates whatever worksheet is missing and (re)writes every
//! header row. Sample rows are written only when asked to, which the
//! connector does once, right after it created the spreadsheet.

use super::connector::StoreHandle;
use super::samples;
use crate::errors::StoreResult;
use crate::store::CellRange;
use crate::utils::time::now_timestamp;
use std::fmt;

pub const CREATED_AT: &str = "Created At";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    ProjectOverview,
    DailyUpdates,
    SprintGoals,
    Retrospective,
}

impl Table {
    pub const ALL: [Table; 4] = [
        Table::ProjectOverview,
        Table::DailyUpdates,
        Table::SprintGoals,
        Table::Retrospective,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Table::ProjectOverview => "Project Overview",
            Table::DailyUpdates => "Daily Updates",
            Table::SprintGoals => "Sprint Goals",
            Table::Retrospective => "Results & Retrospective",
        }
    }

    /// Header row, in sheet order. `Created At` is always last.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::ProjectOverview => &[
                "Project",
                "Goal",
                "Start Date",
                "Target End Date",
                "Current Status",
                "Owner(s)",
                "Notes",
                CREATED_AT,
            ],
            Table::DailyUpdates => &[
                "Date",
                "Project",
                "Developer",
                "Yesterday's Progress",
                "Today's Focus",
                "Blockers",
                "Next Milestone",
                CREATED_AT,
            ],
            Table::SprintGoals => &[
                "Sprint",
                "Dates",
                "Project",
                "Goal",
                "Success Criteria",
                "Owner(s)",
                "Status",
                CREATED_AT,
            ],
            Table::Retrospective => &[
                "Sprint",
                "What Went Well",
                "What Could Be Better",
                "Key Results",
                CREATED_AT,
            ],
        }
    }

    /// Columns a caller supplies on append (everything but `Created At`).
    pub fn input_columns(&self) -> &'static [&'static str] {
        let cols = self.columns();
        &cols[..cols.len() - 1]
    }

    /// Grid size used when the worksheet is created.
    pub fn capacity(&self) -> (usize, usize) {
        match self {
            Table::DailyUpdates => (500, 8),
            Table::Retrospective => (100, 5),
            Table::ProjectOverview | Table::SprintGoals => (100, 8),
        }
    }

    pub fn header_range(&self) -> CellRange {
        CellRange::block(1, 1, self.columns().len())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Whether `ensure_schema` writes the sample rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Samples,
    None,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    pub created: Vec<Table>,
    pub seeded: Vec<Table>,
}

pub fn ensure_schema(handle: &StoreHandle, seed: Seed) -> StoreResult<SchemaReport> {
    let store = handle.store();
    let collection = handle.collection();
    let existing = store.table_titles(collection)?;
    let mut report = SchemaReport::default();

    for table in Table::ALL {
        if !existing.iter().any(|t| t == table.title()) {
            let (rows, cols) = table.capacity();
            tracing::debug!(table = %table, rows, cols, "creating worksheet");
            store.add_table(collection, table.title(), rows, cols)?;
            report.created.push(table);
        }

        let header: Vec<String> = table.columns().iter().map(|c| c.to_string()).collect();
        store.write_range(collection, table.title(), &table.header_range(), &[header])?;
    }

    if seed == Seed::Samples {
        let stamp = now_timestamp();
        for table in Table::ALL {
            let rows = samples::rows_for(table, &stamp);
            if rows.is_empty() {
                continue;
            }
            let range = CellRange::block(2, rows.len(), table.columns().len());
            store.write_range(collection, table.title(), &range, &rows)?;
            report.seeded.push(table);
        }
    }

    Ok(report)
}
