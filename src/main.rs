//! sprint-tracker main entrypoint.

use sprint_tracker::{run, ui::messages};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sprint_tracker=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
