//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use fyyur_server::db::{create_pool_with_options, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Postgres connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Create the venues, artists and shows tables if they are missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool_with_options(&database_url, 1)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to migrate database schema")?;

    tracing::info!("Schema is up to date");
    pool.close().await;
    Ok(())
}
