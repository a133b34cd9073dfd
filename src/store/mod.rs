//! Remote tabular store.
//!
//! `TableStore` is the small set of spreadsheet operations the tracker needs:
//! open-by-name, create-by-name, add-table, read-all-values,
//! write-cell-range, append-row and share. `SheetsStore` talks to Google
//! Sheets / Drive, `MemoryStore` keeps everything in process.

pub mod auth;
pub mod credentials;
pub mod memory;
pub mod range;
pub mod sheets;

pub use credentials::ServiceAccountKey;
pub use memory::MemoryStore;
pub use range::CellRange;
pub use sheets::SheetsStore;

use crate::errors::StoreResult;

/// A spreadsheet (collection of worksheets) resolved by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Permission granted when sharing a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Writer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Writer => "writer",
        }
    }
}

/// Blocking operations against a spreadsheet-like store.
///
/// Worksheets are addressed by title inside a collection. Values are plain
/// strings; `read_values` returns the used area of a worksheet, header
/// included, with trailing empty cells trimmed.
pub trait TableStore {
    fn find_collection(&self, name: &str) -> StoreResult<Option<CollectionInfo>>;

    fn create_collection(&self, name: &str) -> StoreResult<CollectionInfo>;

    fn share(&self, collection: &CollectionInfo, email: &str, role: Role) -> StoreResult<()>;

    fn table_titles(&self, collection: &CollectionInfo) -> StoreResult<Vec<String>>;

    fn add_table(
        &self,
        collection: &CollectionInfo,
        title: &str,
        rows: usize,
        cols: usize,
    ) -> StoreResult<()>;

    fn write_range(
        &self,
        collection: &CollectionInfo,
        title: &str,
        range: &CellRange,
        values: &[Vec<String>],
    ) -> StoreResult<()>;

    fn read_values(&self, collection: &CollectionInfo, title: &str)
    -> StoreResult<Vec<Vec<String>>>;

    /// Insert `values` as a new row after the last non-empty row.
    fn append_row(
        &self,
        collection: &CollectionInfo,
        title: &str,
        values: &[String],
    ) -> StoreResult<()>;
}
