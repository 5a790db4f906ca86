//! Catalog type mutation service.

use super::SafeExecutor;
use crate::{repositories::CatalogTypeRepository, session::Session};
use tracing::instrument;

/// Type mutations for one unit of work. Each returns the affected id, or `None`.
#[derive(Debug)]
pub struct CatalogTypeService {
    executor: SafeExecutor,
}

impl CatalogTypeService {
    /// Creates the service for one unit of work's session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self {
            executor: SafeExecutor::new(session),
        }
    }

    /// Adds a type, returning its id, or `None` on any failure.
    #[instrument(skip(self))]
    pub async fn add(&self, type_name: &str) -> Option<i64> {
        self.executor
            .execute_safe("add_type", async |txn| {
                CatalogTypeRepository::new(txn).add(type_name).await
            })
            .await
    }

    /// Renames a type, returning its id, or `None` on any failure.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, type_name: &str) -> Option<i64> {
        self.executor
            .execute_safe("update_type", async |txn| {
                CatalogTypeRepository::new(txn).update(id, type_name).await
            })
            .await
    }

    /// Deletes a type by id, or `None` if it was missing or still referenced.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Option<i64> {
        self.executor
            .execute_safe("delete_type", async |txn| {
                CatalogTypeRepository::new(txn).remove(id).await
            })
            .await
    }

    /// Deletes a type by name, or `None` if it was missing or still referenced.
    #[instrument(skip(self))]
    pub async fn delete_by_title(&self, type_name: &str) -> Option<i64> {
        self.executor
            .execute_safe("delete_type_by_title", async |txn| {
                CatalogTypeRepository::new(txn)
                    .remove_by_name(type_name)
                    .await
            })
            .await
    }
}
