use crate::db::{Connection, Seed, Session, ensure_schema};
use crate::errors::AppResult;
use crate::ui::{messages, render};

/// Handle the `init` command
///
/// Connecting already creates (and seeds) a missing spreadsheet; the schema
/// pass here puts back worksheets that were deleted by hand.
pub fn handle(session: &mut Session) -> AppResult<()> {
    let handle = match session.connection() {
        Connection::Online(handle) => handle,
        Connection::Offline(reason) => {
            render::offline_notice(reason);
            return Ok(());
        }
    };

    render::origin_notice(handle);

    match ensure_schema(handle, Seed::None) {
        Ok(report) if report.created.is_empty() => {
            messages::info("All worksheets present");
        }
        Ok(report) => {
            for table in report.created {
                messages::success(format!("Created worksheet '{table}'"));
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "schema check failed");
            messages::error(format!("Could not check worksheets: {e}"));
        }
    }

    messages::success(format!("Tracker ready: {}", handle.url()));
    Ok(())
}
