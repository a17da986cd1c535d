//! CLI administration tool for slotbook.
//!
//! Provides commands for managing the booking status catalog, viewing
//! statistics, and performing database operations without requiring HTTP
//! API access.
//!
//! # Usage
//!
//! ```bash
//! # Add a status to the catalog
//! cargo run --bin admin -- status create
//!
//! # List all statuses
//! cargo run --bin admin -- status list
//!
//! # Remove an unused status
//! cargo run --bin admin -- status delete no_show
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//!
//! # Features
//!
//! - **Status Catalog**: Create, list, and delete booking statuses
//! - **Statistics**: View booking and transition counts
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: User-friendly CLI with confirmation dialogs
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use slotbook::domain::entities::NewBookingStatus;
use slotbook::domain::repositories::StatusRepository;
use slotbook::infrastructure::persistence::PgStatusRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing slotbook.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage the booking status catalog
    Status {
        #[command(subcommand)]
        action: StatusAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Status catalog subcommands.
#[derive(Subcommand)]
enum StatusAction {
    /// Add a status to the catalog
    Create {
        /// Status name (e.g., "no_show", "rescheduled")
        #[arg(short, long)]
        name: Option<String>,

        /// Human-readable description
        #[arg(short, long)]
        description: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all statuses
    List,

    /// Delete a status by name or ID
    Delete {
        /// Status name or ID to delete
        name_or_id: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Status { action } => handle_status_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches status catalog commands.
async fn handle_status_action(action: StatusAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgStatusRepository::new(Arc::new(pool.clone())));

    match action {
        StatusAction::Create {
            name,
            description,
            yes,
        } => {
            create_status(repo, name, description, yes).await?;
        }
        StatusAction::List => {
            list_statuses(repo).await?;
        }
        StatusAction::Delete { name_or_id } => {
            delete_status(repo, name_or_id).await?;
        }
    }

    Ok(())
}

/// Adds a status to the catalog with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for status name (or use provided)
/// 2. Prompt for an optional description
/// 3. Refuse duplicates by name
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Store in database
async fn create_status(
    repo: Arc<PgStatusRepository>,
    name: Option<String>,
    description: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "📋 Create Booking Status".bright_blue().bold());
    println!();

    // Get status name
    let status_name: String = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Status name").interact_text()?,
    };

    let status_name = status_name.trim().to_string();
    if status_name.is_empty() {
        anyhow::bail!("Status name must not be empty");
    }

    if repo
        .find_by_name(&status_name)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .is_some()
    {
        println!("{}", "⚠️  A status with this name already exists".yellow());
        return Ok(());
    }

    // Show status details
    println!();
    println!("{}", "Status details:".bright_white().bold());
    println!("  Name:        {}", status_name.cyan());
    println!(
        "  Description: {}",
        description.as_deref().unwrap_or("(none)").bright_black()
    );
    println!();

    // Confirm
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this status?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    // Save to database
    let status = repo
        .create(NewBookingStatus {
            name: status_name,
            description,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create status: {}", e))?;

    println!();
    println!("{}", "✅ Status created successfully!".green().bold());
    println!("  ID: {}", status.id.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Lists all booking statuses.
///
/// # Output Format
///
/// ```text
/// 📋 Booking Statuses
///
///   ID  Name                 Description
///   ─────────────────────────────────────────────────────────
///   1   pending              Awaiting confirmation
///   2   confirmed            Confirmed by the professional
/// ```
async fn list_statuses(repo: Arc<PgStatusRepository>) -> Result<()> {
    println!("{}", "📋 Booking Statuses".bright_blue().bold());
    println!();

    let statuses = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list statuses: {}", e))?;

    if statuses.is_empty() {
        println!("{}", "  No statuses found".yellow());
        println!();
        println!(
            "  Create one with: {} admin status create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<40}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Description".bright_white().bold()
    );
    println!("  {}", "─".repeat(65).bright_black());

    for status in &statuses {
        println!(
            "  {:<3} {:<20} {}",
            status.id.to_string().bright_black(),
            status.name.cyan(),
            status.description.as_deref().unwrap_or("").bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        statuses.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Deletes a status by name or ID with confirmation prompt.
///
/// # Lookup
///
/// - If input is numeric, lookup by ID
/// - Otherwise, lookup by name (exact match)
///
/// # Safety
///
/// - Requires confirmation (default: No)
/// - The database rejects deletion while bookings still reference the status
async fn delete_status(repo: Arc<PgStatusRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🗑  Delete Booking Status".bright_blue().bold());
    println!();

    // Try to find by name or ID
    let status = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let status = status.context("Status not found")?;

    println!("  Status: {}", status.name.cyan());
    println!("  ID:     {}", status.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this status?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    match repo.delete(status.id).await {
        Ok(true) => {
            println!();
            println!("{}", "✅ Status deleted successfully!".green().bold());
            println!();
        }
        Ok(false) => {
            println!("{}", "⚠️  Status was already deleted".yellow());
        }
        Err(e) => {
            println!("{}", format!("❌ Failed to delete status: {}", e).red());
        }
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of bookings
/// - Total number of status transitions
/// - Number of availability windows
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let bookings_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
        .fetch_one(pool)
        .await?;

    let transitions_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM booking_status_history")
        .fetch_one(pool)
        .await?;

    let windows_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM availability_windows")
        .fetch_one(pool)
        .await?;

    println!(
        "  Bookings:             {}",
        bookings_count.to_string().bright_green().bold()
    );
    println!(
        "  Status transitions:   {}",
        transitions_count.to_string().bright_green().bold()
    );
    println!(
        "  Availability windows: {}",
        windows_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
