//! Row repository: read every data row of a table, append one row.

use super::connector::StoreHandle;
use super::schema::Table;
use crate::errors::{StoreError, StoreResult};
use crate::models::{RawRecord, SheetRecord};
use crate::ui::messages;
use crate::utils::time::now_timestamp;

/// All data rows of `table` (header excluded), top to bottom.
pub fn try_read_all(handle: &StoreHandle, table: Table) -> StoreResult<Vec<RawRecord>> {
    let values = handle
        .store()
        .read_values(handle.collection(), table.title())?;

    let mut rows = values.into_iter();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    Ok(rows.map(|row| RawRecord::from_row(&header, &row)).collect())
}

/// Like `try_read_all`, but a failure is reported to the user and yields no rows.
pub fn read_all(handle: &StoreHandle, table: Table) -> Vec<RawRecord> {
    match try_read_all(handle, table) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(%table, error = %e, "read failed");
            messages::error(format!("Error loading {table}: {e}"));
            Vec::new()
        }
    }
}

/// Append one row. `values` follow `table.input_columns()`; `Created At` is
/// stamped here. Nothing is retried: on failure the row is simply not written.
pub fn append(handle: &StoreHandle, table: Table, values: Vec<String>) -> StoreResult<()> {
    let expected = table.input_columns().len();
    if values.len() != expected {
        return Err(StoreError::WriteFailed {
            table: table.title().to_string(),
            reason: format!("expected {expected} values, got {}", values.len()),
        });
    }

    let mut row = values;
    row.push(now_timestamp());

    tracing::debug!(%table, "appending row");
    handle
        .store()
        .append_row(handle.collection(), table.title(), &row)
        .map_err(|e| StoreError::WriteFailed {
            table: table.title().to_string(),
            reason: e.to_string(),
        })
}

pub fn list<T: SheetRecord>(handle: &StoreHandle) -> Vec<T> {
    read_all(handle, T::TABLE).iter().map(T::from_raw).collect()
}

pub fn insert<T: SheetRecord>(handle: &StoreHandle, record: &T) -> StoreResult<()> {
    append(handle, T::TABLE, record.values())
}
