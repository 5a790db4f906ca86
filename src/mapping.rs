//! Storage record to transfer object mapping.
//!
//! Every mapping is total: a well-formed record always maps. The only computed field
//! is the product picture URL, built from the configured host and image path.

use crate::{
    config::catalog::PictureConfig,
    entities::{brand, catalog_type, product},
    models::{CatalogBrandDto, CatalogProductDto, CatalogTypeDto},
};

/// Maps entities to DTOs. Holds only the picture settings.
#[derive(Debug, Clone)]
pub struct Mapper {
    pictures: PictureConfig,
}

impl Mapper {
    /// Creates a mapper resolving pictures against `pictures`.
    #[must_use]
    pub const fn new(pictures: PictureConfig) -> Self {
        Self { pictures }
    }

    /// Builds `{host}/{path}/{file}` for a stored picture file name.
    #[must_use]
    pub fn picture_url(&self, file_name: &str) -> String {
        let host = self.pictures.host.trim_end_matches('/');
        let path = self.pictures.path.trim_matches('/');
        if path.is_empty() {
            format!("{host}/{file_name}")
        } else {
            format!("{host}/{path}/{file_name}")
        }
    }

    /// Maps a product, resolving its picture URL.
    #[must_use]
    pub fn product(&self, model: product::Model) -> CatalogProductDto {
        let picture_url = model
            .picture_file_name
            .as_deref()
            .map(|file| self.picture_url(file));

        CatalogProductDto {
            id: model.id,
            name: model.name,
            price: model.price,
            available_stock: model.available_stock,
            catalog_brand_id: model.catalog_brand_id,
            catalog_type_id: model.catalog_type_id,
            description: model.description,
            picture_url,
        }
    }

    /// Maps a brand.
    #[must_use]
    #[allow(clippy::unused_self)] // Same call shape as `product`
    pub fn brand(&self, model: brand::Model) -> CatalogBrandDto {
        CatalogBrandDto {
            id: model.id,
            brand: model.brand,
        }
    }

    /// Maps a catalog type.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn catalog_type(&self, model: catalog_type::Model) -> CatalogTypeDto {
        CatalogTypeDto {
            id: model.id,
            type_name: model.type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::test_mapper;
    use chrono::NaiveDate;

    fn product_model(picture: Option<&str>) -> product::Model {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or_default();
        product::Model {
            id: 4,
            name: "Cup<T> White Mug".to_string(),
            price: 12.0,
            available_stock: 3,
            catalog_brand_id: Some(2),
            catalog_type_id: None,
            description: Some("Mug".to_string()),
            picture_file_name: picture.map(str::to_string),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_product_picture_url() {
        let dto = test_mapper().product(product_model(Some("4.png")));
        assert_eq!(dto.picture_url.as_deref(), Some("http://pics.test/images/4.png"));
        assert_eq!(dto.id, 4);
        assert_eq!(dto.price, 12.0);
        assert_eq!(dto.catalog_brand_id, Some(2));
        assert_eq!(dto.catalog_type_id, None);
    }

    #[test]
    fn test_product_without_picture_has_no_url() {
        let dto = test_mapper().product(product_model(None));
        assert!(dto.picture_url.is_none());
    }

    #[test]
    fn test_picture_url_normalizes_slashes() {
        let mapper = Mapper::new(PictureConfig {
            host: "http://pics.test/".to_string(),
            path: "/images/".to_string(),
        });
        assert_eq!(mapper.picture_url("1.png"), "http://pics.test/images/1.png");

        let bare = Mapper::new(PictureConfig {
            host: "http://pics.test".to_string(),
            path: String::new(),
        });
        assert_eq!(bare.picture_url("1.png"), "http://pics.test/1.png");
    }

    #[test]
    fn test_brand_and_type_mapping() {
        let mapper = test_mapper();
        let brand = mapper.brand(brand::Model {
            id: 1,
            brand: "Acme".to_string(),
        });
        assert_eq!(brand.brand, "Acme");

        let catalog_type = mapper.catalog_type(catalog_type::Model {
            id: 2,
            type_name: "Mug".to_string(),
        });
        assert_eq!(catalog_type.type_name, "Mug");
    }
}
