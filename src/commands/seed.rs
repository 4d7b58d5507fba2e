//! Seed command - Inserts sample customers into an empty table.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::db::seed::seed_customers;
use crate::infra::Database;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let inserted = seed_customers(&db).await?;
    println!("Inserted {} customer(s)", inserted);

    Ok(())
}
