//! Initial catalog seeding from catalog.toml.
//!
//! Seeding only runs against an empty catalog: if any brand, type or product already
//! exists nothing is inserted. Everything is written in a single transaction.

use crate::{
    config::catalog::AppConfig,
    entities::{Brand, CatalogType, Product},
    errors::{Error, Result},
    repositories::{BrandRepository, CatalogTypeRepository, NewProduct, ProductRepository},
    session::Session,
};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use tracing::{info, instrument};

/// How many records a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Brands inserted
    pub brands: usize,
    /// Types inserted
    pub types: usize,
    /// Products inserted
    pub products: usize,
}

/// Seeds brands, types and products from `config` if the catalog is empty.
///
/// Products reference their brand and type by name; the names must be among the
/// seeded brands and types.
///
/// # Errors
/// Returns an error if a product names an unknown brand or type, or any insert fails.
/// Nothing is written in that case.
#[instrument(skip_all)]
pub async fn seed_catalog(session: &Session, config: &AppConfig) -> Result<SeedSummary> {
    let txn = session.begin().await?;

    if !is_empty(&txn).await? {
        info!("Catalog already populated, skipping seed");
        return Ok(SeedSummary::default());
    }

    let brands = BrandRepository::new(&txn);
    let types = CatalogTypeRepository::new(&txn);
    let products = ProductRepository::new(&txn);

    for name in &config.brands {
        brands.add(name).await?;
    }
    for name in &config.types {
        types.add(name).await?;
    }

    for seed in &config.products {
        let catalog_brand_id = match &seed.brand {
            Some(name) => Some(
                brands
                    .get_by_name(name)
                    .await?
                    .ok_or_else(|| Error::not_found("brand", name))?
                    .id,
            ),
            None => None,
        };
        let catalog_type_id = match &seed.type_name {
            Some(name) => Some(
                types
                    .get_by_name(name)
                    .await?
                    .ok_or_else(|| Error::not_found("type", name))?
                    .id,
            ),
            None => None,
        };

        products
            .add(NewProduct {
                name: seed.name.clone(),
                price: seed.price,
                available_stock: seed.available_stock,
                catalog_brand_id,
                catalog_type_id,
                description: seed.description.clone(),
                picture_file_name: seed.picture_file_name.clone(),
            })
            .await?;
    }

    txn.commit().await?;

    let summary = SeedSummary {
        brands: config.brands.len(),
        types: config.types.len(),
        products: config.products.len(),
    };
    info!(?summary, "Seeded catalog");
    Ok(summary)
}

async fn is_empty<C: ConnectionTrait>(conn: &C) -> Result<bool> {
    Ok(Brand::find().count(conn).await? == 0
        && CatalogType::find().count(conn).await? == 0
        && Product::find().count(conn).await? == 0)
}
