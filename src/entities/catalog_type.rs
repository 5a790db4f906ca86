//! Catalog type entity - The kind of item a product is (e.g., "Mug", "T-Shirt").

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Catalog type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "catalog_types")]
pub struct Model {
    /// Unique identifier for the type
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Unique type name, stored in the `type` column
    #[sea_orm(column_name = "type", unique)]
    pub type_name: String,
}

/// Defines relationships between `CatalogType` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One type has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
