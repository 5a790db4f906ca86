//! Entity module - Contains all SeaORM entity definitions for the catalog.
//! These entities represent the storage-side records and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

/// Brands products can be filed under
pub mod brand;
/// Kinds of catalog item
pub mod catalog_type;
/// Catalog products
pub mod product;

// Re-export specific types to avoid conflicts
pub use brand::{Column as BrandColumn, Entity as Brand, Model as BrandModel};
pub use catalog_type::{
    Column as CatalogTypeColumn, Entity as CatalogType, Model as CatalogTypeModel,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
