//! Taskbook
//!
//! A small team task tracker: contributors and the tasks they own, with soft
//! deletion, completion marking, sorting, and a read-only web API over the
//! same data.

use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use taskbook::api;
use taskbook::cli::{Cli, Command};
use taskbook::config::Config;
use taskbook::db::Database;
use taskbook::error::StoreError;
use taskbook::format::{format_contributors_table, format_tasks_table};
use taskbook::types::SortField;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let mut config = Config::load(cli.config.as_deref().map(Path::new))?;
    if let Some(db_path) = &cli.database {
        config.db_path = db_path.into();
    }

    if let Err(e) = run(cli.command, config).await {
        // Structured store errors get a clean one-line message; anything else
        // keeps the full anyhow chain.
        match e.downcast::<StoreError>() {
            Ok(store_err) => eprintln!("error: {}", store_err),
            Err(e) => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Dispatch a parsed command against the database.
async fn run(command: Command, config: Config) -> Result<()> {
    let db = Arc::new(Database::open(&config.db_path)?);

    match command {
        Command::AddContributor { name, role } => {
            let contributor = db.add_contributor(&name, &role)?;
            println!(
                "Contributor '{}' added ({})",
                contributor.name, contributor.role
            );
        }
        Command::DeleteContributor { name } => {
            let cascaded = db.delete_contributor(&name)?;
            println!("Contributor '{}' deleted; {} owned task(s) flagged", name, cascaded);
        }
        Command::AddTask {
            owner,
            name,
            description,
            start,
            due,
            priority,
        } => {
            let task = db.add_task(&owner, &name, &description, &priority, &start, &due)?;
            println!("Task '{}' added as num {}", task.name, task.num);
        }
        Command::UpdateTask {
            num,
            name,
            description,
            priority,
            due,
        } => {
            let task = db.update_task(
                &num,
                name.as_deref(),
                description.as_deref(),
                priority.as_deref(),
                due.as_deref(),
            )?;
            println!(
                "Task '{}' updated. Name: '{}' Description: '{}' Priority: '{}' Due: {}",
                task.num, task.name, task.description, task.priority, task.due
            );
        }
        Command::MarkTaskComplete { num } => {
            let task = db.mark_task_complete(&num)?;
            println!("Task '{}' ({}) marked complete", task.num, task.name);
        }
        Command::DeleteTask { num } => {
            let task = db.delete_task(&num)?;
            println!("Task '{}' ({}) deleted", task.num, task.name);
        }
        Command::ListTasks { sort } => {
            let field = SortField::parse_or_default(sort.as_deref());
            if let Some(requested) = &sort {
                if SortField::parse(requested).is_none() {
                    warn!(field = %requested, "Unknown sort field, sorting on Num");
                }
            }
            let tasks = db.list_tasks(field)?;
            println!("Sorted on {}", field.as_str());
            print!("{}", format_tasks_table(&tasks));
        }
        Command::ListContributors => {
            let contributors = db.list_contributors()?;
            print!("{}", format_contributors_table(&contributors));
        }
        Command::TableAttributes => {
            let counts = db.table_attributes()?;
            println!("Contributors: {}", counts.contributors);
            println!("Tasks: {}", counts.tasks);
        }
        Command::Serve { port } => {
            let port = port.unwrap_or(config.port);
            info!("Starting taskbook API v{}", env!("CARGO_PKG_VERSION"));
            info!("Database: {:?}", config.db_path);
            api::serve(db, port).await?;
        }
    }

    Ok(())
}
