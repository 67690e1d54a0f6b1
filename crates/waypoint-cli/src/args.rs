use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, TaskCommands, ThemeArgs};

/// Turn goals into dependency-aware task plans and track them
///
/// Waypoint keeps plans of tasks whose dependencies name other tasks by
/// title. It lays a plan out as a board of depth-ordered columns or as a
/// circular dependency graph, tells you which tasks are ready, and can run
/// as an MCP (Model Context Protocol) server so an assistant can decompose
/// goals into plans for you.
///
/// Run without a command to see the board of the active plan.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage tasks within plans
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Show or change the colour theme
    Theme(ThemeArgs),
    /// Start the MCP server
    Serve,
}
