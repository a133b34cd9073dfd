use crate::cli::parser::Commands;
use crate::db::Session;
use crate::errors::AppResult;
use crate::ui::{messages, render};

/// Handle the `status` command
pub fn handle(cmd: &Commands, session: &mut Session) -> AppResult<()> {
    let Commands::Status { refresh } = cmd else {
        return Ok(());
    };

    if let Some(handle) = session.handle() {
        render::origin_notice(handle);
    }
    render::connection_status(session.connection());

    if *refresh {
        messages::info("Refreshing connection…");
        session.refresh();
        render::connection_status(session.connection());
        messages::info(format!("Connection #{}", session.generation()));
    }

    Ok(())
}
