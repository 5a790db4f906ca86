//! Brand entity - A manufacturer or label that products can be filed under.
//!
//! Brand names are unique across the catalog.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Brand database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "catalog_brands")]
pub struct Model {
    /// Unique identifier for the brand
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the brand (e.g., "Acme")
    #[sea_orm(unique)]
    pub brand: String,
}

/// Defines relationships between Brand and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One brand has many products
    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
