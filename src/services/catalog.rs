//! Catalog read service - single products, full listings and paged listings.

use super::{SafeExecutor, paginated};
use crate::{
    mapping::Mapper,
    models::{CatalogBrandDto, CatalogProductDto, CatalogTypeDto, PaginatedItemsResponse},
    repositories::{BrandRepository, CatalogTypeRepository, ProductRepository},
    session::Session,
};
use tracing::instrument;

/// Read operations over the whole catalog for one unit of work.
#[derive(Debug)]
pub struct CatalogService {
    executor: SafeExecutor,
    mapper: Mapper,
}

impl CatalogService {
    /// Creates the service for one unit of work's session.
    #[must_use]
    pub const fn new(session: Session, mapper: Mapper) -> Self {
        Self {
            executor: SafeExecutor::new(session),
            mapper,
        }
    }

    /// A single product, or `None` if it does not exist or the lookup failed.
    #[instrument(skip(self))]
    pub async fn get_product_by_id(&self, id: i64) -> Option<CatalogProductDto> {
        self.executor
            .execute_safe("get_product_by_id", async |txn| {
                let product = ProductRepository::new(txn).get_by_id(id).await?;
                Ok(product.map(|p| self.mapper.product(p)))
            })
            .await
            .flatten()
    }

    /// Every product, in listing order.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Option<Vec<CatalogProductDto>> {
        self.executor
            .execute_safe("get_products", async |txn| {
                let products = ProductRepository::new(txn).get_all().await?;
                Ok(products.into_iter().map(|p| self.mapper.product(p)).collect())
            })
            .await
    }

    /// One page of all products.
    #[instrument(skip(self))]
    pub async fn get_products_by_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Option<PaginatedItemsResponse<CatalogProductDto>> {
        self.executor
            .execute_safe("get_products_by_page", async |txn| {
                let page = ProductRepository::new(txn)
                    .get_page(page_index, page_size)
                    .await?;
                Ok(paginated(page, page_index, page_size, |p| {
                    self.mapper.product(p)
                }))
            })
            .await
    }

    /// One page of the products under a brand id.
    #[instrument(skip(self))]
    pub async fn get_products_by_brand_id(
        &self,
        brand_id: i64,
        page_index: u64,
        page_size: u64,
    ) -> Option<PaginatedItemsResponse<CatalogProductDto>> {
        self.executor
            .execute_safe("get_products_by_brand_id", async |txn| {
                let page = ProductRepository::new(txn)
                    .get_page_by_brand_id(brand_id, page_index, page_size)
                    .await?;
                Ok(paginated(page, page_index, page_size, |p| {
                    self.mapper.product(p)
                }))
            })
            .await
    }

    /// One page of the products under a brand name.
    #[instrument(skip(self))]
    pub async fn get_products_by_brand_title(
        &self,
        brand: &str,
        page_index: u64,
        page_size: u64,
    ) -> Option<PaginatedItemsResponse<CatalogProductDto>> {
        self.executor
            .execute_safe("get_products_by_brand_title", async |txn| {
                let page = ProductRepository::new(txn)
                    .get_page_by_brand_title(brand, page_index, page_size)
                    .await?;
                Ok(paginated(page, page_index, page_size, |p| {
                    self.mapper.product(p)
                }))
            })
            .await
    }

    /// One page of the products under a type id.
    #[instrument(skip(self))]
    pub async fn get_products_by_type_id(
        &self,
        type_id: i64,
        page_index: u64,
        page_size: u64,
    ) -> Option<PaginatedItemsResponse<CatalogProductDto>> {
        self.executor
            .execute_safe("get_products_by_type_id", async |txn| {
                let page = ProductRepository::new(txn)
                    .get_page_by_type_id(type_id, page_index, page_size)
                    .await?;
                Ok(paginated(page, page_index, page_size, |p| {
                    self.mapper.product(p)
                }))
            })
            .await
    }

    /// One page of the products under a type name.
    #[instrument(skip(self))]
    pub async fn get_products_by_type_title(
        &self,
        type_name: &str,
        page_index: u64,
        page_size: u64,
    ) -> Option<PaginatedItemsResponse<CatalogProductDto>> {
        self.executor
            .execute_safe("get_products_by_type_title", async |txn| {
                let page = ProductRepository::new(txn)
                    .get_page_by_type_title(type_name, page_index, page_size)
                    .await?;
                Ok(paginated(page, page_index, page_size, |p| {
                    self.mapper.product(p)
                }))
            })
            .await
    }

    /// Every brand, ordered by name.
    #[instrument(skip(self))]
    pub async fn get_brands(&self) -> Option<Vec<CatalogBrandDto>> {
        self.executor
            .execute_safe("get_brands", async |txn| {
                let brands = BrandRepository::new(txn).get_all().await?;
                Ok(brands.into_iter().map(|b| self.mapper.brand(b)).collect())
            })
            .await
    }

    /// One page of brands.
    #[instrument(skip(self))]
    pub async fn get_brands_by_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Option<PaginatedItemsResponse<CatalogBrandDto>> {
        self.executor
            .execute_safe("get_brands_by_page", async |txn| {
                let page = BrandRepository::new(txn)
                    .get_page(page_index, page_size)
                    .await?;
                Ok(paginated(page, page_index, page_size, |b| {
                    self.mapper.brand(b)
                }))
            })
            .await
    }

    /// Every type, ordered by name.
    #[instrument(skip(self))]
    pub async fn get_types(&self) -> Option<Vec<CatalogTypeDto>> {
        self.executor
            .execute_safe("get_types", async |txn| {
                let types = CatalogTypeRepository::new(txn).get_all().await?;
                Ok(types
                    .into_iter()
                    .map(|t| self.mapper.catalog_type(t))
                    .collect())
            })
            .await
    }

    /// One page of types.
    #[instrument(skip(self))]
    pub async fn get_types_by_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Option<PaginatedItemsResponse<CatalogTypeDto>> {
        self.executor
            .execute_safe("get_types_by_page", async |txn| {
                let page = CatalogTypeRepository::new(txn)
                    .get_page(page_index, page_size)
                    .await?;
                Ok(paginated(page, page_index, page_size, |t| {
                    self.mapper.catalog_type(t)
                }))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::errors::Result;
    use crate::repositories::BrandRepository;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_empty_catalog_page() -> Result<()> {
        let provider = setup_test_sessions().await?;
        let service = CatalogService::new(provider.acquire(), test_mapper());

        let page = service.get_products_by_page(0, 10).await.unwrap();
        assert_eq!(page.count, 0);
        assert_eq!(page.page_index, 0);
        assert_eq!(page.page_size, 10);
        assert!(page.data.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_zero_page_size_is_absent() -> Result<()> {
        let provider = setup_test_sessions().await?;
        let service = CatalogService::new(provider.acquire(), test_mapper());

        assert!(service.get_products_by_page(0, 0).await.is_none());
        assert!(service.get_brands_by_page(0, 0).await.is_none());
        assert!(service.get_types_by_page(0, 0).await.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_huge_paging_arguments_give_empty_pages() -> Result<()> {
        let (db, brand_id, type_id) = setup_with_brand_and_type().await?;
        create_test_product(&db, "Cup", Some(brand_id), Some(type_id)).await?;
        let service =
            CatalogService::new(crate::session::SessionProvider::new(db).acquire(), test_mapper());

        for (index, size) in [(1 << 62, 4), (1 << 63, 1), (u64::MAX, u64::MAX)] {
            let brands = service.get_brands_by_page(index, size).await.unwrap();
            assert_eq!(brands.count, 1);
            assert!(brands.data.is_empty());
            assert_eq!(brands.page_index, index);

            let types = service.get_types_by_page(index, size).await.unwrap();
            assert_eq!(types.count, 1);
            assert!(types.data.is_empty());

            let products = service.get_products_by_page(index, size).await.unwrap();
            assert_eq!(products.count, 1);
            assert!(products.data.is_empty());

            let by_brand = service
                .get_products_by_brand_title("Acme", index, size)
                .await
                .unwrap();
            assert_eq!(by_brand.count, 1);
            assert!(by_brand.data.is_empty());
        }

        let everything = service.get_products_by_page(0, u64::MAX).await.unwrap();
        assert_eq!(everything.data.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_products_by_brand_id() -> Result<()> {
        let db = setup_test_db().await?;
        let brands = BrandRepository::new(&db);
        brands.add("Azure").await?;
        brands.add(".NET").await?;
        let brand_id = brands.add("Other").await?;
        assert_eq!(brand_id, 3);

        create_test_product(&db, "Hoodie", Some(brand_id), None).await?;
        create_test_product(&db, "Mug", Some(brand_id), None).await?;
        create_test_product(&db, "Pin", None, None).await?;

        let service =
            CatalogService::new(crate::session::SessionProvider::new(db).acquire(), test_mapper());
        let page = service.get_products_by_brand_id(3, 0, 10).await.unwrap();

        assert_eq!(page.count, 2);
        assert_eq!(page.data.len(), 2);
        assert!(page.data.iter().all(|p| p.catalog_brand_id == Some(3)));

        Ok(())
    }

    #[tokio::test]
    async fn test_products_by_titles_map_pictures() -> Result<()> {
        let (db, brand_id, type_id) = setup_with_brand_and_type().await?;
        crate::repositories::ProductRepository::new(&db)
            .add(crate::repositories::NewProduct {
                catalog_brand_id: Some(brand_id),
                catalog_type_id: Some(type_id),
                picture_file_name: Some("1.png".to_string()),
                ..new_product("Cup")
            })
            .await?;

        let service =
            CatalogService::new(crate::session::SessionProvider::new(db).acquire(), test_mapper());

        let by_brand = service
            .get_products_by_brand_title("Acme", 0, 10)
            .await
            .unwrap();
        assert_eq!(by_brand.count, 1);
        assert_eq!(
            by_brand.data[0].picture_url.as_deref(),
            Some("http://pics.test/images/1.png")
        );

        let by_type = service.get_products_by_type_title("Mug", 0, 10).await.unwrap();
        assert_eq!(by_type.data, by_brand.data);

        let by_type_id = service
            .get_products_by_type_id(type_id, 0, 10)
            .await
            .unwrap();
        assert_eq!(by_type_id.data, by_brand.data);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_product_by_id() -> Result<()> {
        let db = setup_test_db().await?;
        let id = create_test_product(&db, "Mug", None, None).await?;

        let service =
            CatalogService::new(crate::session::SessionProvider::new(db).acquire(), test_mapper());

        let found = service.get_product_by_id(id).await.unwrap();
        assert_eq!(found.name, "Mug");
        assert!(found.picture_url.is_none());

        assert!(service.get_product_by_id(id + 100).await.is_none());

        let all = service.get_products().await.unwrap();
        assert_eq!(all, vec![found]);

        Ok(())
    }

    #[tokio::test]
    async fn test_brands_and_types() -> Result<()> {
        let (db, _, _) = setup_with_brand_and_type().await?;
        BrandRepository::new(&db).add("Azure").await?;

        let service =
            CatalogService::new(crate::session::SessionProvider::new(db).acquire(), test_mapper());

        let brands = service.get_brands().await.unwrap();
        let names: Vec<_> = brands.iter().map(|b| b.brand.as_str()).collect();
        assert_eq!(names, ["Acme", "Azure"]);

        let page = service.get_brands_by_page(1, 1).await.unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.data[0].brand, "Azure");

        let types = service.get_types().await.unwrap();
        assert_eq!(types.len(), 1);
        let type_page = service.get_types_by_page(0, 5).await.unwrap();
        assert_eq!(type_page.data, types);

        Ok(())
    }
}
