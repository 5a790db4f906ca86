//! Shared test utilities for the catalog service.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::catalog::PictureConfig,
    errors::Result,
    mapping::Mapper,
    repositories::{BrandRepository, CatalogTypeRepository, NewProduct, ProductRepository},
    session::SessionProvider,
};
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the test harness, once per process.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Same as [`setup_test_db`], wrapped in a session provider for service tests.
pub async fn setup_test_sessions() -> Result<SessionProvider> {
    Ok(SessionProvider::new(setup_test_db().await?))
}

/// A mapper serving pictures from `http://pics.test/images`.
pub fn test_mapper() -> Mapper {
    Mapper::new(PictureConfig {
        host: "http://pics.test".to_string(),
        path: "images".to_string(),
    })
}

/// Product fields with sensible defaults.
///
/// # Defaults
/// * price: 10.0
/// * `available_stock`: 5
/// * no brand, type, description or picture
pub fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price: 10.0,
        available_stock: 5,
        catalog_brand_id: None,
        catalog_type_id: None,
        description: None,
        picture_file_name: None,
    }
}

/// Inserts a product with default fields and the given brand/type, returning its id.
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    brand_id: Option<i64>,
    type_id: Option<i64>,
) -> Result<i64> {
    ProductRepository::new(db)
        .add(NewProduct {
            catalog_brand_id: brand_id,
            catalog_type_id: type_id,
            ..new_product(name)
        })
        .await
}

/// Sets up a database with one brand ("Acme") and one type ("Mug").
/// Returns (db, `brand_id`, `type_id`).
pub async fn setup_with_brand_and_type() -> Result<(DatabaseConnection, i64, i64)> {
    let db = setup_test_db().await?;
    let brand_id = BrandRepository::new(&db).add("Acme").await?;
    let type_id = CatalogTypeRepository::new(&db).add("Mug").await?;
    Ok((db, brand_id, type_id))
}
