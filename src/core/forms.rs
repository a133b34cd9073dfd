//! Add-form validation: required fields must be non-empty, nothing more.

use crate::errors::{AppError, AppResult};
use crate::models::SheetRecord;
use crate::utils::formatting::join_names;

/// Names of required fields left empty (whitespace counts as empty).
pub fn missing_fields<T: SheetRecord>(record: &T) -> Vec<&'static str> {
    record
        .required()
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
}

/// `Please fill in Project and Goal fields`, listing every required field of the form.
pub fn required_message<T: SheetRecord>(record: &T) -> String {
    let names: Vec<&str> = record.required().into_iter().map(|(n, _)| n).collect();
    let noun = if names.len() == 1 { "field" } else { "fields" };
    format!("Please fill in {} {noun}", join_names(&names))
}

pub fn validate<T: SheetRecord>(record: &T) -> AppResult<()> {
    if missing_fields(record).is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(required_message(record)))
    }
}
