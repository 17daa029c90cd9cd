pub mod init;
pub mod read;
pub mod utils;
pub mod write;

use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};

/// Opens (creating if needed) the database and makes sure the schema exists.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid database URL '{}'", database_url))?
        .create_if_missing(true);

    let connection = SqlitePool::connect_with(options)
        .await
        .with_context(|| format!("Failed to open database '{}'", database_url))?;

    init::create_transactions(&connection).await?;

    Ok(connection)
}
