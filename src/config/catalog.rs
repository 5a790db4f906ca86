//! Catalog configuration loading from catalog.toml
//!
//! The file holds the picture URL settings used by the mapper and, optionally,
//! brands, types and products to seed an empty catalog with.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the catalog configuration file
pub const DEFAULT_CONFIG_PATH: &str = "catalog.toml";

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Where product pictures are served from
    #[serde(default)]
    pub pictures: PictureConfig,
    /// Brand names to seed
    #[serde(default)]
    pub brands: Vec<String>,
    /// Type names to seed
    #[serde(default)]
    pub types: Vec<String>,
    /// Products to seed
    #[serde(default)]
    pub products: Vec<ProductSeed>,
}

/// Settings for turning a stored picture file name into a URL
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PictureConfig {
    /// Scheme and authority of the picture host (e.g., `http://localhost:5002`)
    pub host: String,
    /// Path under the host where pictures live (e.g., `assets/images`)
    pub path: String,
}

impl Default for PictureConfig {
    fn default() -> Self {
        Self {
            host: "http://localhost:5002".to_string(),
            path: "assets/images".to_string(),
        }
    }
}

/// A product to seed, with brand and type referenced by name
#[derive(Debug, Deserialize, Clone)]
pub struct ProductSeed {
    /// Display name
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units in stock, zero when omitted
    #[serde(default)]
    pub available_stock: i32,
    /// Name of a seeded brand
    pub brand: Option<String>,
    /// Name of a seeded type, written as `type` in the file
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Picture file name under the configured image path
    pub picture_file_name: Option<String>,
}

/// Loads catalog configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Loads the catalog configuration from `CATALOG_CONFIG`, or ./catalog.toml.
///
/// A missing default file is not an error; the built-in defaults are used instead.
pub fn load_default_config() -> Result<AppConfig> {
    if let Ok(path) = std::env::var("CATALOG_CONFIG") {
        return load_config(path);
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_config(DEFAULT_CONFIG_PATH)
    } else {
        tracing::info!("No {DEFAULT_CONFIG_PATH} found, using defaults");
        Ok(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_parse_catalog_config() {
        let toml_str = r#"
            brands = ["Azure", ".NET"]
            types = ["Mug"]

            [pictures]
            host = "http://cdn.example.com"
            path = "pics"

            [[products]]
            name = ".NET Bot Black Hoodie"
            price = 19.5
            available_stock = 100
            brand = ".NET"
            type = "Mug"
            picture_file_name = "1.png"
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.pictures.host, "http://cdn.example.com");
        assert_eq!(config.pictures.path, "pics");
        assert_eq!(config.brands, vec!["Azure", ".NET"]);
        assert_eq!(config.types, vec!["Mug"]);
        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].price, 19.5);
        assert_eq!(config.products[0].type_name.as_deref(), Some("Mug"));
        assert!(config.products[0].description.is_none());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.pictures, PictureConfig::default());
        assert!(config.brands.is_empty());
        assert!(config.products.is_empty());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("does/not/exist.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
