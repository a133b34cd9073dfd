//! sprint-tracker library root.
//! Exposes the CLI parser, the `run()` entry point and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use db::{Session, StoreOpener};
use errors::{AppResult, ConnectionError};
use store::{MemoryStore, TableStore};

/// Opener over a process-local store seeded on first connect.
pub fn sandbox_opener(store: MemoryStore) -> StoreOpener {
    Box::new(move || Ok(Box::new(store.clone()) as Box<dyn TableStore>))
}

/// Connect the way the global flags ask for.
pub fn open_session(cli: &Cli, cfg: &Config) -> Session {
    if cli.offline {
        return Session::offline(ConnectionError::Disabled);
    }
    if cli.sandbox {
        return Session::open(sandbox_opener(MemoryStore::new()), cfg.connect_settings());
    }
    Session::open(cfg.sheets_opener(), cfg.connect_settings())
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands;

    if let Commands::Config { .. } = &cli.command {
        let path = Config::resolve_path(cli.config.as_deref());
        return commands::config::handle(&cli.command, cfg, &path);
    }

    let mut session = open_session(cli, cfg);
    match &cli.command {
        Commands::Init => commands::init::handle(&mut session),
        Commands::Status { .. } => commands::status::handle(&cli.command, &mut session),
        Commands::Project { .. } => commands::project::handle(&cli.command, cfg, &mut session),
        Commands::Daily { .. } => commands::daily::handle(&cli.command, cfg, &mut session),
        Commands::Sprint { .. } => commands::sprint::handle(&cli.command, cfg, &mut session),
        Commands::Retro { .. } => commands::retro::handle(&cli.command, &mut session),
        Commands::Config { .. } => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cfg = Config::load(cli.config.as_deref())?;
    dispatch(&cli, &cfg)
}
