use clap::{Parser, Subcommand};
use std::path::PathBuf;

const PROJECT_STATUSES: [&str; 4] = ["In Progress", "On Hold", "Completed", "Planned"];
const SPRINT_STATUSES: [&str; 4] = ["In Progress", "Planned", "Completed", "On Hold"];

/// Command-line interface definition for sprint-tracker
#[derive(Parser)]
#[command(
    name = "sprint-tracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track projects, daily updates, sprint goals and retrospectives in Google Sheets",
    long_about = None
)]
pub struct Cli {
    /// Use this configuration file instead of ~/.sprinttracker/sprinttracker.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not connect; listings are empty and nothing is saved
    #[arg(global = true, long = "offline", conflicts_with = "sandbox")]
    pub offline: bool,

    /// Work against a throwaway in-memory spreadsheet seeded with sample data
    #[arg(global = true, long = "sandbox")]
    pub sandbox: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Connect, creating and seeding the spreadsheet if needed
    Init,

    /// Show the connection state and the spreadsheet URL
    Status {
        #[arg(long = "refresh", help = "Drop the connection and connect again")]
        refresh: bool,
    },

    /// Inspect or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report missing fields and whether credentials resolve")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Project overview
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Daily stand-up updates
    Daily {
        #[command(subcommand)]
        action: DailyAction,
    },

    /// Sprint goals
    Sprint {
        #[command(subcommand)]
        action: SprintAction,
    },

    /// Sprint results and retrospectives
    Retro {
        #[command(subcommand)]
        action: RetroAction,
    },
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Add a project
    Add {
        #[arg(long = "name", default_value = "")]
        name: String,
        #[arg(long = "goal", default_value = "")]
        goal: String,
        #[arg(long = "start", default_value = "", help = "Start date (free text)")]
        start: String,
        #[arg(long = "end", default_value = "", help = "Target end date (free text)")]
        end: String,
        #[arg(long = "status", default_value = "In Progress", value_parser = PROJECT_STATUSES)]
        status: String,
        #[arg(long = "owners", default_value = "")]
        owners: String,
        #[arg(long = "notes", default_value = "")]
        notes: String,
    },
    /// List all projects
    List {
        #[arg(long = "json", help = "Print the rows as JSON")]
        json: bool,
    },
    /// Print the project names offered by the other forms
    Names,
}

#[derive(Subcommand)]
pub enum DailyAction {
    /// Add a daily update
    Add {
        #[arg(long = "date", help = "Date of the update (YYYY-MM-DD, default today)")]
        date: Option<String>,
        #[arg(long = "project", help = "Project name (default: first known project)")]
        project: Option<String>,
        #[arg(long = "developer", default_value = "")]
        developer: String,
        #[arg(long = "yesterday", default_value = "", help = "Yesterday's progress")]
        yesterday: String,
        #[arg(long = "today", default_value = "", help = "Today's focus")]
        today: String,
        #[arg(long = "blockers", default_value = "")]
        blockers: String,
        #[arg(long = "milestone", default_value = "", help = "Next milestone")]
        milestone: String,
    },
    /// List the most recent updates, newest first
    List {
        #[arg(long = "json", help = "Print the rows as JSON")]
        json: bool,
        #[arg(long = "limit", help = "How many updates to show (default from config)")]
        limit: Option<usize>,
    },
}

#[derive(Subcommand)]
pub enum SprintAction {
    /// Add a sprint goal
    Add {
        #[arg(long = "sprint", default_value = "")]
        sprint: String,
        #[arg(long = "dates", default_value = "")]
        dates: String,
        #[arg(long = "project", help = "Project name (default: first known project)")]
        project: Option<String>,
        #[arg(long = "goal", default_value = "")]
        goal: String,
        #[arg(long = "criteria", default_value = "", help = "Success criteria")]
        criteria: String,
        #[arg(long = "owners", default_value = "")]
        owners: String,
        #[arg(long = "status", default_value = "In Progress", value_parser = SPRINT_STATUSES)]
        status: String,
    },
    /// List all sprint goals
    List {
        #[arg(long = "json", help = "Print the rows as JSON")]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum RetroAction {
    /// Add a retrospective
    Add {
        #[arg(long = "sprint", default_value = "")]
        sprint: String,
        #[arg(long = "went-well", default_value = "")]
        went_well: String,
        #[arg(long = "could-be-better", default_value = "")]
        could_be_better: String,
        #[arg(long = "key-results", default_value = "")]
        key_results: String,
    },
    /// List all retrospectives
    List {
        #[arg(long = "json", help = "Print the rows as JSON")]
        json: bool,
    },
}
