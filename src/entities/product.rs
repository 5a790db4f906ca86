//! Product entity - Represents a sellable item in the catalog.
//!
//! Each product has a name, price, stock level, optional brand and type references,
//! and an optional picture file name. The picture file name is never exposed directly;
//! the mapper turns it into a full URL.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "catalog_products")]
pub struct Model {
    /// Unique identifier for the product
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Name of the product (e.g., "Roslyn Red Sheet")
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Units currently in stock, never negative
    pub available_stock: i32,
    /// Brand this product is filed under, if any
    pub catalog_brand_id: Option<i64>,
    /// Type this product is filed under, if any
    pub catalog_type_id: Option<i64>,
    /// Free-form description
    pub description: Option<String>,
    /// File name of the product picture, relative to the configured image path
    pub picture_file_name: Option<String>,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Defines relationships between Product and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each product optionally belongs to one brand
    #[sea_orm(
        belongs_to = "super::brand::Entity",
        from = "Column::CatalogBrandId",
        to = "super::brand::Column::Id"
    )]
    Brand,
    /// Each product optionally belongs to one type
    #[sea_orm(
        belongs_to = "super::catalog_type::Entity",
        from = "Column::CatalogTypeId",
        to = "super::catalog_type::Column::Id"
    )]
    CatalogType,
}

impl Related<super::brand::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Brand.def()
    }
}

impl Related<super::catalog_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CatalogType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
