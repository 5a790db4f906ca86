//! Product repository - reads and writes `catalog_products` rows.
//!
//! Besides the usual id/name operations, products can be paged by brand or type,
//! either by id or by the brand/type name. All product listings are ordered by
//! name, with the id breaking ties between products that share a name, so page
//! boundaries are reproducible.

use super::{PageRequest, PaginatedItems, fetch_page};
use crate::{
    entities::{Brand, CatalogType, Product, brand, catalog_type, product},
    errors::{Error, Result},
};
use sea_orm::{JoinType, QueryOrder, QuerySelect, Select, Set, prelude::*};
use tracing::debug;

const ENTITY: &str = "product";

/// Fields for a new product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// Display name; surrounding whitespace is trimmed
    pub name: String,
    /// Unit price, finite and non-negative
    pub price: f64,
    /// Units in stock, non-negative
    pub available_stock: i32,
    /// Brand the product is filed under, if any
    pub catalog_brand_id: Option<i64>,
    /// Type the product is filed under, if any
    pub catalog_type_id: Option<i64>,
    /// Free-form description
    pub description: Option<String>,
    /// Picture file name, resolved to a URL by the mapper
    pub picture_file_name: Option<String>,
}

/// A partial product update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    /// New display name
    pub name: Option<String>,
    /// New unit price
    pub price: Option<f64>,
    /// New stock level
    pub available_stock: Option<i32>,
    /// New brand reference; must exist
    pub catalog_brand_id: Option<i64>,
    /// New type reference; must exist
    pub catalog_type_id: Option<i64>,
    /// New description
    pub description: Option<String>,
    /// New picture file name
    pub picture_file_name: Option<String>,
}

/// Product operations over a borrowed connection or transaction.
pub struct ProductRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    /// Creates a repository borrowing the given connection or transaction.
    pub const fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts a new product and returns its generated id.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The name is empty, the price is negative or not finite, or the stock is negative
    /// - The referenced brand or type does not exist (`NotFound`)
    /// - The database insert fails
    pub async fn add(&self, new: NewProduct) -> Result<i64> {
        let name = validate_product_name(&new.name)?;
        validate_price(new.price)?;
        validate_stock(new.available_stock)?;
        self.ensure_references(new.catalog_brand_id, new.catalog_type_id)
            .await?;

        let now = chrono::Utc::now().naive_utc();

        let model = product::ActiveModel {
            name: Set(name),
            price: Set(new.price),
            available_stock: Set(new.available_stock),
            catalog_brand_id: Set(new.catalog_brand_id),
            catalog_type_id: Set(new.catalog_type_id),
            description: Set(new.description),
            picture_file_name: Set(new.picture_file_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await?;

        debug!(id = model.id, name = %model.name, "Added product");
        Ok(model.id)
    }

    /// Retrieves a specific product by its unique ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<product::Model>> {
        Product::find_by_id(id)
            .one(self.conn)
            .await
            .map_err(Into::into)
    }

    /// Finds a product by name. Product names are not unique; the lowest id wins.
    pub async fn get_by_name(&self, name: &str) -> Result<Option<product::Model>> {
        Product::find()
            .filter(product::Column::Name.eq(name.trim()))
            .order_by_asc(product::Column::Id)
            .one(self.conn)
            .await
            .map_err(Into::into)
    }

    /// Overwrites the supplied fields of an existing product.
    ///
    /// # Errors
    /// Returns `NotFound` if the product, or a newly referenced brand or type, does
    /// not exist, and `InvalidArgument` if a supplied field is out of range.
    pub async fn update(&self, id: i64, changes: ProductChanges) -> Result<i64> {
        let mut product: product::ActiveModel = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?
            .into();

        if let Some(name) = changes.name {
            product.name = Set(validate_product_name(&name)?);
        }
        if let Some(price) = changes.price {
            validate_price(price)?;
            product.price = Set(price);
        }
        if let Some(stock) = changes.available_stock {
            validate_stock(stock)?;
            product.available_stock = Set(stock);
        }

        self.ensure_references(changes.catalog_brand_id, changes.catalog_type_id)
            .await?;
        if let Some(brand_id) = changes.catalog_brand_id {
            product.catalog_brand_id = Set(Some(brand_id));
        }
        if let Some(type_id) = changes.catalog_type_id {
            product.catalog_type_id = Set(Some(type_id));
        }
        if let Some(description) = changes.description {
            product.description = Set(Some(description));
        }
        if let Some(picture) = changes.picture_file_name {
            product.picture_file_name = Set(Some(picture));
        }

        product.updated_at = Set(chrono::Utc::now().naive_utc());
        let model = product.update(self.conn).await?;
        Ok(model.id)
    }

    /// Deletes a product by id.
    ///
    /// # Errors
    /// Returns `NotFound` if no product has this id.
    pub async fn remove(&self, id: i64) -> Result<i64> {
        let product = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, id))?;

        product.delete(self.conn).await?;
        Ok(id)
    }

    /// Deletes the product [`get_by_name`](Self::get_by_name) would return.
    pub async fn remove_by_name(&self, name: &str) -> Result<i64> {
        let product = self
            .get_by_name(name)
            .await?
            .ok_or_else(|| Error::not_found(ENTITY, name))?;

        let id = product.id;
        product.delete(self.conn).await?;
        Ok(id)
    }

    /// Every product, in listing order.
    pub async fn get_all(&self) -> Result<Vec<product::Model>> {
        ordered(Product::find())
            .all(self.conn)
            .await
            .map_err(Into::into)
    }

    /// One page of all products.
    pub async fn get_page(
        &self,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedItems<product::Model>> {
        let page = PageRequest::new(page_index, page_size)?;
        fetch_page(self.conn, ordered(Product::find()), page).await
    }

    /// One page of the products filed under the given brand id.
    pub async fn get_page_by_brand_id(
        &self,
        brand_id: i64,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedItems<product::Model>> {
        let page = PageRequest::new(page_index, page_size)?;
        let query = Product::find().filter(product::Column::CatalogBrandId.eq(brand_id));
        fetch_page(self.conn, ordered(query), page).await
    }

    /// One page of the products filed under the brand with the given name.
    pub async fn get_page_by_brand_title(
        &self,
        brand: &str,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedItems<product::Model>> {
        let page = PageRequest::new(page_index, page_size)?;
        let query = Product::find()
            .join(JoinType::InnerJoin, product::Relation::Brand.def())
            .filter(brand::Column::Brand.eq(brand.trim()));
        fetch_page(self.conn, ordered(query), page).await
    }

    /// One page of the products filed under the given type id.
    pub async fn get_page_by_type_id(
        &self,
        type_id: i64,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedItems<product::Model>> {
        let page = PageRequest::new(page_index, page_size)?;
        let query = Product::find().filter(product::Column::CatalogTypeId.eq(type_id));
        fetch_page(self.conn, ordered(query), page).await
    }

    /// One page of the products filed under the type with the given name.
    pub async fn get_page_by_type_title(
        &self,
        type_name: &str,
        page_index: u64,
        page_size: u64,
    ) -> Result<PaginatedItems<product::Model>> {
        let page = PageRequest::new(page_index, page_size)?;
        let query = Product::find()
            .join(JoinType::InnerJoin, product::Relation::CatalogType.def())
            .filter(catalog_type::Column::TypeName.eq(type_name.trim()));
        fetch_page(self.conn, ordered(query), page).await
    }

    async fn ensure_references(&self, brand_id: Option<i64>, type_id: Option<i64>) -> Result<()> {
        if let Some(brand_id) = brand_id
            && Brand::find_by_id(brand_id).one(self.conn).await?.is_none()
        {
            return Err(Error::not_found("brand", brand_id));
        }
        if let Some(type_id) = type_id
            && CatalogType::find_by_id(type_id)
                .one(self.conn)
                .await?
                .is_none()
        {
            return Err(Error::not_found("type", type_id));
        }
        Ok(())
    }
}

fn ordered(query: Select<Product>) -> Select<Product> {
    query
        .order_by_asc(product::Column::Name)
        .order_by_asc(product::Column::Id)
}

fn validate_product_name(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_argument("product name cannot be empty"));
    }
    Ok(name.to_string())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::invalid_argument(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

fn validate_stock(stock: i32) -> Result<()> {
    if stock < 0 {
        return Err(Error::invalid_argument(format!(
            "available stock cannot be negative, got {stock}"
        )));
    }
    Ok(())
}
