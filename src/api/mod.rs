//! Read-only web API module.
//!
//! Serves the same contributor and task data as the CLI over HTTP. Enabled by
//! the `serve` subcommand.

mod server;

pub use server::{
    ApiError, ApiServer, build_router, contributor_profile, health, list_all_tasks,
    list_contributors, list_tasks_sorted, serve,
};
