//! In-process `TableStore`.
//!
//! Mirrors the parts of Google Sheets behaviour the tracker relies on: a new
//! spreadsheet starts with a `Sheet1` tab, `write_range` must stay inside the
//! worksheet grid, `append_row` grows the grid and lands after the last
//! non-empty row, and reads trim trailing blanks. Clones share the same data,
//! so a refreshed session sees what the previous one wrote.

use super::{CellRange, CollectionInfo, Role, TableStore};
use crate::errors::{StoreError, StoreResult};
use std::sync::{Arc, Mutex, MutexGuard};

const DEFAULT_SHEET: &str = "Sheet1";
const DEFAULT_ROWS: usize = 1000;
const DEFAULT_COLS: usize = 26;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    collections: Vec<Collection>,
    next_id: u64,
    fail_writes: bool,
    fail_sharing: bool,
    quota_exceeded: bool,
}

#[derive(Debug)]
struct Collection {
    info: CollectionInfo,
    tables: Vec<Worksheet>,
    permissions: Vec<(String, Role)>,
}

#[derive(Debug)]
struct Worksheet {
    title: String,
    rows: usize,
    cols: usize,
    cells: Vec<Vec<String>>,
}

impl Worksheet {
    fn new(title: &str, rows: usize, cols: usize) -> Self {
        Self {
            title: title.to_string(),
            rows,
            cols,
            cells: Vec::new(),
        }
    }

    fn set(&mut self, row: usize, col: usize, value: &str) {
        if self.cells.len() < row {
            self.cells.resize_with(row, Vec::new);
        }
        let line = &mut self.cells[row - 1];
        if line.len() < col {
            line.resize(col, String::new());
        }
        line[col - 1] = value.to_string();
    }

    fn last_used_row(&self) -> usize {
        self.cells
            .iter()
            .rposition(|row| row.iter().any(|c| !c.is_empty()))
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    fn used_values(&self) -> Vec<Vec<String>> {
        self.cells[..self.last_used_row()]
            .iter()
            .map(|row| {
                let end = row.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1);
                row[..end].to_vec()
            })
            .collect()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // a poisoned lock only means a test thread panicked mid-call
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make every subsequent cell write fail, as a dropped connection would.
    pub fn fail_writes(&self, fail: bool) {
        self.lock().fail_writes = fail;
    }

    /// Make sharing fail (e.g. the target account does not exist).
    pub fn fail_sharing(&self, fail: bool) {
        self.lock().fail_sharing = fail;
    }

    /// Refuse to create new spreadsheets because Drive is full.
    pub fn exhaust_quota(&self, exhausted: bool) {
        self.lock().quota_exceeded = exhausted;
    }

    /// Accounts a collection has been shared with.
    pub fn permissions(&self, collection: &CollectionInfo) -> Vec<(String, Role)> {
        self.lock()
            .collections
            .iter()
            .find(|c| c.info.id == collection.id)
            .map(|c| c.permissions.clone())
            .unwrap_or_default()
    }

    pub fn collection_count(&self) -> usize {
        self.lock().collections.len()
    }
}

impl Inner {
    fn collection_mut(&mut self, info: &CollectionInfo) -> StoreResult<&mut Collection> {
        self.collections
            .iter_mut()
            .find(|c| c.info.id == info.id)
            .ok_or_else(|| StoreError::CollectionNotFound(info.title.clone()))
    }

    fn worksheet_mut(&mut self, info: &CollectionInfo, title: &str) -> StoreResult<&mut Worksheet> {
        self.collection_mut(info)?
            .tables
            .iter_mut()
            .find(|t| t.title == title)
            .ok_or_else(|| StoreError::TableNotFound(title.to_string()))
    }
}

impl TableStore for MemoryStore {
    fn find_collection(&self, name: &str) -> StoreResult<Option<CollectionInfo>> {
        Ok(self
            .lock()
            .collections
            .iter()
            .find(|c| c.info.title == name)
            .map(|c| c.info.clone()))
    }

    fn create_collection(&self, name: &str) -> StoreResult<CollectionInfo> {
        let mut inner = self.lock();
        if inner.quota_exceeded {
            return Err(StoreError::QuotaExceeded);
        }

        inner.next_id += 1;
        let id = format!("mem-{}", inner.next_id);
        let info = CollectionInfo {
            url: format!("memory://{id}"),
            id,
            title: name.to_string(),
        };

        inner.collections.push(Collection {
            info: info.clone(),
            tables: vec![Worksheet::new(DEFAULT_SHEET, DEFAULT_ROWS, DEFAULT_COLS)],
            permissions: Vec::new(),
        });
        Ok(info)
    }

    fn share(&self, collection: &CollectionInfo, email: &str, role: Role) -> StoreResult<()> {
        let mut inner = self.lock();
        if inner.fail_sharing {
            return Err(StoreError::Api {
                status: 400,
                message: format!("Invalid sharing request for {email}"),
            });
        }
        inner
            .collection_mut(collection)?
            .permissions
            .push((email.to_string(), role));
        Ok(())
    }

    fn table_titles(&self, collection: &CollectionInfo) -> StoreResult<Vec<String>> {
        let mut inner = self.lock();
        Ok(inner
            .collection_mut(collection)?
            .tables
            .iter()
            .map(|t| t.title.clone())
            .collect())
    }

    fn add_table(
        &self,
        collection: &CollectionInfo,
        title: &str,
        rows: usize,
        cols: usize,
    ) -> StoreResult<()> {
        let mut inner = self.lock();
        let coll = inner.collection_mut(collection)?;
        if coll.tables.iter().any(|t| t.title == title) {
            return Err(StoreError::Api {
                status: 400,
                message: format!("A sheet with the name \"{title}\" already exists"),
            });
        }
        coll.tables.push(Worksheet::new(title, rows, cols));
        Ok(())
    }

    fn write_range(
        &self,
        collection: &CollectionInfo,
        title: &str,
        range: &CellRange,
        values: &[Vec<String>],
    ) -> StoreResult<()> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StoreError::Transport("connection reset by peer".into()));
        }

        let sheet = inner.worksheet_mut(collection, title)?;
        if range.end_row > sheet.rows || range.end_col > sheet.cols {
            return Err(StoreError::Api {
                status: 400,
                message: format!("Range ({title}!{range}) exceeds grid limits"),
            });
        }
        if values.len() > range.rows() || values.iter().any(|r| r.len() > range.cols()) {
            return Err(StoreError::Api {
                status: 400,
                message: format!("Values do not fit the requested range {range}"),
            });
        }

        for (r, row) in values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                sheet.set(range.start_row + r, range.start_col + c, value);
            }
        }
        Ok(())
    }

    fn read_values(
        &self,
        collection: &CollectionInfo,
        title: &str,
    ) -> StoreResult<Vec<Vec<String>>> {
        let mut inner = self.lock();
        Ok(inner.worksheet_mut(collection, title)?.used_values())
    }

    fn append_row(
        &self,
        collection: &CollectionInfo,
        title: &str,
        values: &[String],
    ) -> StoreResult<()> {
        let mut inner = self.lock();
        if inner.fail_writes {
            return Err(StoreError::Transport("connection reset by peer".into()));
        }

        let sheet = inner.worksheet_mut(collection, title)?;
        let row = sheet.last_used_row() + 1;
        sheet.rows = sheet.rows.max(row);
        sheet.cols = sheet.cols.max(values.len());
        for (c, value) in values.iter().enumerate() {
            sheet.set(row, c + 1, value);
        }
        Ok(())
    }
}
