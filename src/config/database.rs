//! Database configuration module for the catalog service.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the storage schema always matches the Rust structs. Existing tables are left untouched;
//! there is no migration support.

use crate::entities::{Brand, CatalogType, Product};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::{debug, info, instrument};

const DEFAULT_DATABASE_URL: &str = "sqlite://data/catalog.sqlite?mode=rwc";

/// Gets the database URL from the `DATABASE_URL` environment variable, or the default
/// local `SQLite` path if it is not set.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Establishes a connection pool to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    connect(&get_database_url()).await
}

/// Establishes a connection pool to the given database URL.
#[instrument]
pub async fn connect(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Opening database connection");
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the brand, type and product tables if they do not exist yet.
///
/// Brands and types are created first so the product table's foreign keys resolve.
#[instrument(skip(db))]
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut brand_table = schema.create_table_from_entity(Brand);
    let mut type_table = schema.create_table_from_entity(CatalogType);
    let mut product_table = schema.create_table_from_entity(Product);

    brand_table.if_not_exists();
    type_table.if_not_exists();
    product_table.if_not_exists();

    db.execute(builder.build(&brand_table)).await?;
    db.execute(builder.build(&type_table)).await?;
    db.execute(builder.build(&product_table)).await?;

    info!("Catalog tables ensured");
    Ok(())
}
