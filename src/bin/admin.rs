//! CLI administration tool for petclinic.
//!
//! Reads owners, pet types and visits straight from the database and loads
//! the sample data set, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List owners with their pets
//! cargo run --bin admin -- owners list
//!
//! # Show one owner
//! cargo run --bin admin -- owners show 6
//!
//! # Visits of several pets
//! cargo run --bin admin -- visits list --pet 7,8
//!
//! # Load the sample owners, pets and visits
//! cargo run --bin admin -- db seed
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string, or the `DB_*` parts

use petclinic::config::Config;
use petclinic::domain::entities::Owner;
use petclinic::domain::repositories::{OwnerRepository, PetRepository, VisitRepository};
use petclinic::infrastructure::persistence::{
    PgOwnerRepository, PgPetRepository, PgVisitRepository,
};
use petclinic::infrastructure::seed::load_sample_data;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing petclinic.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect owners
    Owners {
        #[command(subcommand)]
        action: OwnerAction,
    },

    /// Inspect the pet type catalogue
    PetTypes {
        #[command(subcommand)]
        action: PetTypeAction,
    },

    /// Inspect visits
    Visits {
        #[command(subcommand)]
        action: VisitAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum OwnerAction {
    /// List all owners
    List,

    /// Show one owner with its pets
    Show {
        /// Owner ID
        id: i32,
    },
}

#[derive(Subcommand)]
enum PetTypeAction {
    /// List all pet types
    List,
}

#[derive(Subcommand)]
enum VisitAction {
    /// List visits of the given pets
    List {
        /// Comma-separated pet IDs (e.g., "7,8")
        #[arg(short, long, value_delimiter = ',', required = true)]
        pet: Vec<i32>,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply migrations and load the sample data set
    Seed {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;
    let pool = Arc::new(pool);

    match cli.command {
        Commands::Owners { action } => handle_owner_action(action, pool).await?,
        Commands::PetTypes { action } => handle_pet_type_action(action, pool).await?,
        Commands::Visits { action } => handle_visit_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, pool).await?,
    }

    Ok(())
}

async fn handle_owner_action(action: OwnerAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgOwnerRepository::new(pool);

    match action {
        OwnerAction::List => {
            println!("{}", "👥 Owners".bright_blue().bold());
            println!();

            let owners = repo
                .find_all()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            if owners.is_empty() {
                println!("{}", "  No owners found".yellow());
                println!();
                return Ok(());
            }

            for owner in &owners {
                println!(
                    "  {:<4} {:<25} {:<15} {}",
                    owner.id().unwrap_or_default().to_string().bright_black(),
                    format!("{} {}", owner.first_name, owner.last_name).cyan(),
                    owner.city,
                    format!("{} pets", owner.pets().len()).bright_black()
                );
            }

            println!();
            println!(
                "  Total: {}",
                owners.len().to_string().bright_white().bold()
            );
            println!();
        }
        OwnerAction::Show { id } => {
            let owner = repo
                .find_by_id(id)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                .with_context(|| format!("Owner {} not found", id))?;

            print_owner(&owner);
        }
    }

    Ok(())
}

fn print_owner(owner: &Owner) {
    println!(
        "{}",
        format!("👤 {} {}", owner.first_name, owner.last_name)
            .bright_blue()
            .bold()
    );
    println!();
    println!("  Address:   {}, {}", owner.address, owner.city);
    println!("  Telephone: {}", owner.telephone);
    println!();

    let pets = owner.pets();
    if pets.is_empty() {
        println!("{}", "  No pets".yellow());
    }
    for pet in pets {
        let birth_date = pet
            .birth_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let pet_type = pet.pet_type.as_ref().map_or("-", |t| t.name.as_str());

        println!(
            "  {:<4} {:<15} {:<10} {}",
            pet.id().unwrap_or_default().to_string().bright_black(),
            pet.name.cyan(),
            pet_type,
            birth_date.bright_black()
        );
    }
    println!();
}

async fn handle_pet_type_action(action: PetTypeAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgPetRepository::new(pool);

    match action {
        PetTypeAction::List => {
            println!("{}", "🏷️  Pet Types".bright_blue().bold());
            println!();

            let types = repo
                .find_pet_types()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            for pet_type in &types {
                println!(
                    "  {:<4} {}",
                    pet_type.id.to_string().bright_black(),
                    pet_type.name.cyan()
                );
            }
            println!();
        }
    }

    Ok(())
}

async fn handle_visit_action(action: VisitAction, pool: Arc<PgPool>) -> Result<()> {
    let repo = PgVisitRepository::new(pool);

    match action {
        VisitAction::List { pet } => {
            println!("{}", "📋 Visits".bright_blue().bold());
            println!();

            let visits = repo
                .find_by_pet_id_in(pet)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            if visits.is_empty() {
                println!("{}", "  No visits found".yellow());
                println!();
                return Ok(());
            }

            for visit in &visits {
                println!(
                    "  {:<4} pet {:<4} {} {}",
                    visit.id.unwrap_or_default().to_string().bright_black(),
                    visit.pet_id.to_string().cyan(),
                    visit.date.format("%Y-%m-%d").to_string().bright_black(),
                    visit.description
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Handles database diagnostic and seeding commands.
async fn handle_db_action(action: DbAction, pool: Arc<PgPool>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool.as_ref()).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool.as_ref())
                .await?;
            let owners: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM owners")
                .fetch_one(pool.as_ref())
                .await?;
            let pets: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pets")
                .fetch_one(pool.as_ref())
                .await?;
            let visits: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM visits")
                .fetch_one(pool.as_ref())
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Owners:     {}", owners.to_string().bright_green().bold());
            println!("  Pets:       {}", pets.to_string().bright_green().bold());
            println!("  Visits:     {}", visits.to_string().bright_green().bold());
            println!();
        }
        DbAction::Seed { yes } => seed(pool, yes).await?,
    }

    Ok(())
}

/// Applies migrations, then writes the sample owners, pets and visits.
///
/// Running it twice duplicates the sample owners; the prompt defaults to No.
async fn seed(pool: Arc<PgPool>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🌱 Load Sample Data".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Insert the sample owners, pets and visits?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    sqlx::migrate!("./migrations")
        .run(pool.as_ref())
        .await
        .context("Failed to run migrations")?;

    let owners = PgOwnerRepository::new(pool.clone());
    let pets = PgPetRepository::new(pool.clone());
    let visits = PgVisitRepository::new(pool);

    let summary = load_sample_data(&owners, &pets, &visits)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load sample data: {}", e))?;

    println!();
    println!("{}", "✅ Sample data loaded".green().bold());
    println!("  Owners: {}", summary.owners.to_string().bright_white());
    println!("  Pets:   {}", summary.pets.to_string().bright_white());
    println!("  Visits: {}", summary.visits.to_string().bright_white());
    println!();

    Ok(())
}
