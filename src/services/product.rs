//! Product mutation service - add, update and delete pass-throughs.

use super::SafeExecutor;
use crate::{
    repositories::{NewProduct, ProductChanges, ProductRepository},
    session::Session,
};
use tracing::instrument;

/// Product mutations for one unit of work. Each returns the affected id, or `None`.
#[derive(Debug)]
pub struct ProductService {
    executor: SafeExecutor,
}

impl ProductService {
    /// Creates the service for one unit of work's session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self {
            executor: SafeExecutor::new(session),
        }
    }

    /// Adds a product, returning its id, or `None` on any failure.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn add(&self, product: NewProduct) -> Option<i64> {
        self.executor
            .execute_safe("add_product", async |txn| {
                ProductRepository::new(txn).add(product).await
            })
            .await
    }

    /// Applies a partial update, returning the id, or `None` on any failure.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, changes: ProductChanges) -> Option<i64> {
        self.executor
            .execute_safe("update_product", async |txn| {
                ProductRepository::new(txn).update(id, changes).await
            })
            .await
    }

    /// Deletes a product, returning its id, or `None` if it was missing or the delete failed.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Option<i64> {
        self.executor
            .execute_safe("delete_product", async |txn| {
                ProductRepository::new(txn).remove(id).await
            })
            .await
    }
}
