//! Brand repository - reads and writes `catalog_brands` rows.

use super::{PageRequest, PaginatedItems, fetch_page};
use crate::{
    entities::{Brand, brand},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

const ENTITY: &str = "brand";

/// Brand operations over a borrowed connection or transaction.
pub struct BrandRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> BrandRepository<'a, C> {
    /// Creates a repository borrowing the given connection or transaction.
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new brand and returns its generated id.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name is empty or whitespace-only
    /// - A brand with the same name already exists (`Conflict`)
    /// - The database insert fails
    pub async fn add(&self, name: &str) -> Result<i64> {
        let name = validate_name(name)?;

        let model = brand::ActiveModel {
            brand: Set(name),
            ..Default::default()
        }
        .insert(self.conn)
        .await?;

        debug!(id = model.id, brand = %model.brand, "Added brand");
        Ok(model.id)
    }

    /// Finds a brand by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<brand::Model>> {
        Brand::find_by_id(id).one(self.conn).await.map_err(Into::into)
    }

    /// Finds a brand by its unique name, ignoring surrounding whitespace.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<brand::Model>> {
        Brand::find()
            .filter(brand::Column::Brand.eq(name.trim()))
            .one(self.conn)
            .await
            .map_err(Into::into)
    }

    /// Renames an existing brand.
    ///
    /// # Errors
    /// Returns `NotFound` if no brand has this id, `Conflict` if the new name is taken.
    pub async fn update(&self, id: i64, name: &str) -> Result<i64> {
        let name = validate_name(name)?;

        let mut brand: brand::ActiveModel = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?
            .into();

        brand.brand = Set(name);
        let model = brand.update(self.conn).await?;
        Ok(model.id)
    }

    /// Deletes a brand by id.
    ///
    /// # Errors
    /// Returns `NotFound` if no brand has this id, `Conflict` if products still reference it.
    pub async fn remove(&self, id: i64) -> Result<i64> {
        let brand = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?;

        brand.delete(self.conn).await?;
        Ok(id)
    }

    /// Deletes a brand by its unique name.
    pub async fn remove_by_name(&self, name: &str) -> Result<i64> {
        let brand = self
            .get_by_name(name)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, name))?;

        let id = brand.id;
        brand.delete(self.conn).await?;
        Ok(id)
    }

    /// All brands, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<brand::Model>> {
        Brand::find()
            .order_by_asc(brand::Column::Brand)
            .all(self.conn)
            .await
            .map_err(Into::into)
    }

    /// One page of brands, ordered by name.
    pub async fn get_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedItems<brand::Model>> {
        let page = PageRequest::new(page_index, page_size)?;
        fetch_page(
            self.conn,
            Brand::find().order_by_asc(brand::Column::Brand),
            page,
        )
        .await
    }
}

pub(super) fn validate_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_argument("name cannot be empty"));
    }
    Ok(name.to_string())
}
