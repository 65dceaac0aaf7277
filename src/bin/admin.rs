//! CLI administration tool for url-shortener.
//!
//! Provides commands for managing stored URLs and user accounts, viewing
//! statistics, and performing database checks without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # List stored URLs, newest first
//! cargo run --bin admin -- url list --page 1 --page-size 20
//!
//! # Delete a URL
//! cargo run --bin admin -- url delete ex1
//!
//! # Create a user account
//! cargo run --bin admin -- user create --email admin@example.com
//!
//! # View statistics
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection string
//! - `STORAGE_PATH`: SQLite file used when `DATABASE_URL` is not set
//!   (default `./storage/url-shortener.db`)

use url_shortener::api::dto::auth::CredentialsRequest;
use url_shortener::application::services::{PasswordService, normalize_email};
use url_shortener::config::Config;
use url_shortener::domain::entities::NewUser;
use url_shortener::domain::repositories::{UrlRepository, UserRepository};
use url_shortener::infrastructure::persistence::{
    SqliteUrlRepository, SqliteUserRepository, pool,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::SqlitePool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing url-shortener.
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
    /// Manage stored URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// List stored URLs, newest first
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        #[arg(short = 's', long, default_value_t = 25)]
        page_size: i64,
    },

    /// Delete a URL by alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a user account
    Create {
        #[arg(short, long)]
        email: Option<String>,
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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url();

    let pool = pool::connect_url(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", database_url))?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &pool).await?,
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches URL management commands.
async fn handle_url_action(action: UrlAction, pool: &SqlitePool) -> Result<()> {
    let repo = SqliteUrlRepository::new(Arc::new(pool.clone()));

    match action {
        UrlAction::List { page, page_size } => list_urls(&repo, page, page_size).await?,
        UrlAction::Delete { alias, yes } => delete_url(&repo, &alias, yes).await?,
    }

    Ok(())
}

/// Prints one page of stored URLs.
///
/// # Output Format
///
/// ```text
/// URLs (page 1)
///
///   ID    Alias              URL
///   ─────────────────────────────────────────────────────────────
///   2     ex1                https://example.com
/// ```
async fn list_urls(repo: &SqliteUrlRepository, page: i64, page_size: i64) -> Result<()> {
    if page < 1 || !(1..=100).contains(&page_size) {
        anyhow::bail!("page must be >= 1 and page size between 1 and 100");
    }

    println!("{}", format!("URLs (page {})", page).bright_blue().bold());
    println!();

    let records = repo
        .list(page, page_size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    if records.is_empty() {
        println!("{}", "  No URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<18} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &records {
        println!(
            "  {:<5} {:<18} {}",
            record.id.to_string().bright_black(),
            record.alias.cyan(),
            record.url
        );
    }

    let total = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count URLs: {}", e))?;

    println!();
    println!("  Total: {}", total.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a URL after confirmation (default: No).
async fn delete_url(repo: &SqliteUrlRepository, alias: &str, skip_confirm: bool) -> Result<()> {
    let record = repo
        .find_by_alias(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("URL not found")?;

    println!("  Alias: {}", record.alias.cyan());
    println!("  URL:   {}", record.url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    repo.delete(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete URL: {}", e))?;

    println!("{}", "URL deleted".green().bold());

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &SqlitePool) -> Result<()> {
    let repo = SqliteUserRepository::new(Arc::new(pool.clone()));

    match action {
        UserAction::Create { email } => create_user(&repo, email).await?,
    }

    Ok(())
}

/// Creates a user with interactive prompts.
///
/// The password is read without echo and asked twice. Hashing uses the
/// default Argon2id cost.
async fn create_user(repo: &SqliteUserRepository, email: Option<String>) -> Result<()> {
    println!("{}", "Create user".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Repeat password", "Passwords do not match")
        .interact()?;

    let credentials = CredentialsRequest { email, password };
    credentials
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid user details: {}", e))?;

    let password_hash = PasswordService::default()
        .hash(&credentials.password)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    let user = repo
        .create(NewUser {
            email: normalize_email(&credentials.email),
            password_hash,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} {} (id {})",
        "User created:".green().bold(),
        user.email.cyan(),
        user.id
    );
    println!();

    Ok(())
}

/// Displays system statistics.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url")
        .fetch_one(pool)
        .await?;

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    println!(
        "  URLs:  {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Users: {}",
        users_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:   {}", version.bright_white());
            println!("  Location: {}", Config::load_database_url().bright_white());
            println!();
        }
    }

    Ok(())
}
