//! Transfer objects - the externally visible shape of catalog records.
//!
//! These mirror the entities but never expose storage-only fields such as
//! timestamps or the raw picture file name.

use serde::{Deserialize, Serialize};

/// A product as seen by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProductDto {
    /// Product id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock
    pub available_stock: i32,
    /// Brand id, if the product is filed under one
    pub catalog_brand_id: Option<i64>,
    /// Type id, if the product is filed under one
    pub catalog_type_id: Option<i64>,
    /// Free-form description
    pub description: Option<String>,
    /// Fully resolved picture URL, absent when the product has no picture
    pub picture_url: Option<String>,
}

/// A brand as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogBrandDto {
    /// Brand id
    pub id: i64,
    /// Unique brand name
    pub brand: String,
}

/// A catalog type as seen by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTypeDto {
    /// Type id
    pub id: i64,
    /// Unique type name, serialized as `type`
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Response envelope for every paged listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedItemsResponse<T> {
    /// Number of matching records across all pages
    pub count: u64,
    /// Zero-based index of this page
    pub page_index: u64,
    /// Requested page size
    pub page_size: u64,
    /// The mapped records on this page
    pub data: Vec<T>,
}
