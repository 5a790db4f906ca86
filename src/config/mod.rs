/// Database configuration and connection management
pub mod database;

/// Catalog settings (picture URLs, seed data) loaded from catalog.toml
pub mod catalog;
