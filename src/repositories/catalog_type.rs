//! Catalog type repository - reads and writes `catalog_types` rows.

use super::{PageRequest, PaginatedItems, brand::validate_name, fetch_page};
use crate::{
    entities::{CatalogType, catalog_type},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

const ENTITY: &str = "type";

/// Catalog type operations over a borrowed connection or transaction.
pub struct CatalogTypeRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogTypeRepository<'a, C> {
    /// Creates a repository borrowing the given connection or transaction.
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new type and returns its generated id.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for an empty name, `Conflict` if the name is taken.
    pub async fn add(&self, name: &str) -> Result<i64> {
        let name = validate_name(name)?;

        let model = catalog_type::ActiveModel {
            type_name: Set(name),
            ..Default::default()
        }
        .insert(self.conn)
        .await?;

        debug!(id = model.id, type_name = %model.type_name, "Added catalog type");
        Ok(model.id)
    }

    /// Finds a type by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<catalog_type::Model>> {
        CatalogType::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(Into::into)
    }

    /// Finds a type by its unique name, ignoring surrounding whitespace.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<catalog_type::Model>> {
        CatalogType::find()
            .filter(catalog_type::Column::TypeName.eq(name.trim()))
            .one(self.conn)
            .await
            .map_err(Into::into)
    }

    /// Renames an existing type.
    ///
    /// # Errors
    /// Returns `NotFound` if no type has this id.
    pub async fn update(&self, id: i64, name: &str) -> Result<i64> {
        let name = validate_name(name)?;

        let mut catalog_type: catalog_type::ActiveModel = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?
            .into();

        catalog_type.type_name = Set(name);
        let model = catalog_type.update(self.conn).await?;
        Ok(model.id)
    }

    /// Deletes a type by id.
    ///
    /// # Errors
    /// Returns `NotFound` if no type has this id, `Conflict` if products still reference it.
    pub async fn remove(&self, id: i64) -> Result<i64> {
        let catalog_type = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?;

        catalog_type.delete(self.conn).await?;
        Ok(id)
    }

    /// Deletes a type by its unique name.
    pub async fn remove_by_name(&self, name: &str) -> Result<i64> {
        let catalog_type = self
            .get_by_name(name)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, name))?;

        let id = catalog_type.id;
        catalog_type.delete(self.conn).await?;
        Ok(id)
    }

    /// All types, ordered by name.
    pub async fn get_all(&self) -> Result<Vec<catalog_type::Model>> {
        CatalogType::find()
            .order_by_asc(catalog_type::Column::TypeName)
            .all(self.conn)
            .await
            .map_err(Into::into)
    }

    /// One page of types, ordered by name.
    pub async fn get_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedItems<catalog_type::Model>> {
        let page = PageRequest::new(page_index, page_size)?;
        fetch_page(
            self.conn,
            CatalogType::find().order_by_asc(catalog_type::Column::TypeName),
            page,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_type_lifecycle() -> Result<()> {
        let db = setup_test_db().await?;
        let repo = CatalogTypeRepository::new(&db);

        let id = repo.add("Mug").await?;
        assert_eq!(repo.get_by_name("Mug").await?.unwrap().id, id);

        repo.update(id, "Cup").await?;
        assert_eq!(repo.get_by_id(id).await?.unwrap().type_name, "Cup");

        assert_eq!(repo.remove_by_name("Cup").await?, id);
        assert!(repo.get_by_id(id).await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_lookup_by_untrimmed_name() -> Result<()> {
        let db = setup_test_db().await?;
        let repo = CatalogTypeRepository::new(&db);

        let id = repo.add("  Zed ").await?;
        assert_eq!(repo.get_by_name(" Zed ").await?.unwrap().type_name, "Zed");
        assert_eq!(repo.remove_by_name("Zed  ").await?, id);
        assert!(repo.get_by_name("Zed").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_remove_missing_is_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let repo = CatalogTypeRepository::new(&db);

        let result = repo.remove(7).await;
        assert!(matches!(result, Err(Error::NotFound { entity: "type", .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_rename_to_existing_name_conflicts() -> Result<()> {
        let db = setup_test_db().await?;
        let repo = CatalogTypeRepository::new(&db);

        repo.add("Mug").await?;
        let shirt = repo.add("T-Shirt").await?;

        let result = repo.update(shirt, "Mug").await;
        assert!(matches!(result, Err(Error::Conflict { .. })));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_and_page_agree() -> Result<()> {
        let db = setup_test_db().await?;
        let repo = CatalogTypeRepository::new(&db);

        for name in ["Sheet", "Mug", "Pin", "T-Shirt"] {
            repo.add(name).await?;
        }

        let all = repo.get_all().await?;
        let page = repo.get_page(0, 10).await?;
        assert_eq!(page.total_count, 4);
        assert_eq!(page.data, all);
        assert_eq!(all[0].type_name, "Mug");

        Ok(())
    }
}
