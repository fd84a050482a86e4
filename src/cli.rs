//! CLI command definitions for taskbook.
//!
//! This module defines the CLI structure using clap's derive macros. The
//! subcommand surface keeps the historical snake_case spelling
//! (`add_contributor`, `list_tasks`, ...). Missing or extra positional
//! arguments produce clap's usage message and a non-zero exit.

use clap::{Parser, Subcommand};

/// Contributor and task tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Path to database file (overrides config)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
#[command(rename_all = "snake_case")]
pub enum Command {
    /// Add a new contributor to the project
    AddContributor {
        /// Contributor name (unique)
        name: String,
        /// Contributor role
        role: String,
    },

    /// Soft-delete a contributor and every task they own
    DeleteContributor {
        /// Contributor name
        name: String,
    },

    /// Add a new task owned by an existing contributor
    AddTask {
        /// Owner (must be an existing contributor)
        owner: String,
        /// Task name
        name: String,
        /// Task description
        description: String,
        /// Start date (YYYY-MM-DD)
        start: String,
        /// Due date (YYYY-MM-DD, strictly after start)
        due: String,
        /// Priority: High, Medium, or Low (any casing)
        priority: String,
    },

    /// Update a task; requires the task number and at least one field
    UpdateTask {
        /// Task number
        num: String,
        /// New task name
        name: Option<String>,
        /// New description
        description: Option<String>,
        /// New priority
        priority: Option<String>,
        /// New due date (re-checked against the stored start date)
        due: Option<String>,
    },

    /// Mark a task complete
    MarkTaskComplete {
        /// Task number
        num: String,
    },

    /// Soft-delete a task
    DeleteTask {
        /// Task number
        num: String,
    },

    /// List all tasks, optionally sorted by a field
    ListTasks {
        /// Sort field: Num, Owner, Name, Priority, Start, Due, Finished,
        /// Deleted (any casing; unknown fields fall back to Num)
        sort: Option<String>,
    },

    /// List all contributors
    ListContributors,

    /// Print row counts for both tables
    TableAttributes,

    /// Start the read-only web API
    Serve {
        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
}
