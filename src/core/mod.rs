//! Presentation logic that does not depend on the terminal.

pub mod forms;
pub mod listing;
pub mod tracker;
