//! Service layer - orchestrates repositories and the mapper for callers.
//!
//! Every public service operation runs through [`SafeExecutor::execute_safe`]: it opens
//! a transaction on the unit of work's session, runs the operation, commits on success,
//! and on any failure rolls back, logs the error, and hands back `None`. Callers above
//! this layer never see a typed error; `None` means "no result" whatever the cause.

/// Paged and single-record reads across products, brands and types
pub mod catalog;
/// Catalog type add/update/delete
pub mod catalog_type;
/// Product add/update/delete
pub mod product;

pub use catalog::CatalogService;
pub use catalog_type::CatalogTypeService;
pub use product::ProductService;

use crate::{
    errors::Result, models::PaginatedItemsResponse, repositories::PaginatedItems,
    session::Session,
};
use sea_orm::DatabaseTransaction;
use tracing::{error, warn};

/// Runs operations inside a transaction and contains their failures.
#[derive(Debug)]
pub struct SafeExecutor {
    session: Session,
}

impl SafeExecutor {
    /// Creates an executor running every operation on `session`.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Runs `action` in a fresh transaction, returning `None` if anything fails.
    pub async fn execute_safe<T, F>(&self, operation: &'static str, action: F) -> Option<T>
    where
        F: AsyncFnOnce(&DatabaseTransaction) -> Result<T>,
    {
        match self.execute(action).await {
            Ok(value) => Some(value),
            Err(e) => {
                error!(operation, error = %e, "Catalog operation failed, transaction rolled back");
                None
            }
        }
    }

    async fn execute<T, F>(&self, action: F) -> Result<T>
    where
        F: AsyncFnOnce(&DatabaseTransaction) -> Result<T>,
    {
        let txn = self.session.begin().await?;

        match action(&txn).await {
            Ok(value) => {
                txn.commit().await?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "Rollback failed");
                }
                Err(e)
            }
        }
    }
}

/// Wraps a repository page in the response envelope, mapping each record.
fn paginated<M, T>(
    page: PaginatedItems<M>,
    page_index: u64,
    page_size: u64,
    map: impl FnMut(M) -> T,
) -> PaginatedItemsResponse<T> {
    PaginatedItemsResponse {
        count: page.total_count,
        page_index,
        page_size,
        data: page.data.into_iter().map(map).collect(),
    }
}
