//! Entity repositories and the shared pagination protocol.
//!
//! Each repository borrows a connection or transaction and performs exactly the
//! reads and writes for its entity kind. Every paged query goes through `fetch_page`
//! so all variants count, order, skip and take the same way.

/// Brand repository
pub mod brand;
/// Catalog type repository
pub mod catalog_type;
/// Product repository, including the brand/type filtered pages
pub mod product;

pub use brand::BrandRepository;
pub use catalog_type::CatalogTypeRepository;
pub use product::{NewProduct, ProductChanges, ProductRepository};

use crate::errors::{Error, Result};
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QuerySelect, Select};
use serde::Serialize;

/// A validated page position: zero-based index and a non-zero size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page_index: u64,
    page_size: u64,
}

impl PageRequest {
    /// Validates paging arguments.
    ///
    /// Any index is accepted; one past the last page simply yields no records.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if `page_size` is zero.
    pub fn new(page_index: u64, page_size: u64) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::invalid_argument("page size must be greater than zero"));
        }
        Ok(Self {
            page_index,
            page_size,
        })
    }

    /// Zero-based page index
    #[must_use]
    pub const fn page_index(&self) -> u64 {
        self.page_index
    }

    /// Maximum number of items on the page
    #[must_use]
    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Number of records to skip before this page starts, saturating at `u64::MAX`.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// One page of an ordered result set, plus the size of the whole set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedItems<T> {
    /// Number of records matching the query, ignoring paging
    pub total_count: u64,
    /// The records on the requested page, in query order
    pub data: Vec<T>,
}

/// Largest offset or limit the `SQLite` binder accepts; it binds both as `i64`.
const MAX_BOUND: u64 = i64::MAX.unsigned_abs();

/// Runs an already filtered and ordered query as one page.
///
/// The total is counted over the full query first, then the page is sliced with
/// offset/limit. A page starting at or past the end of the set is answered without
/// the slice query. The two statements are not isolated from concurrent writers
/// beyond what the caller's transaction provides.
pub(crate) async fn fetch_page<C, E>(
    conn: &C,
    query: Select<E>,
    page: PageRequest,
) -> Result<PaginatedItems<E::Model>>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: Sync,
{
    let total_count = query.clone().count(conn).await?;

    let offset = page.offset();
    if offset >= total_count || offset > MAX_BOUND {
        return Ok(PaginatedItems {
            total_count,
            data: Vec::new(),
        });
    }

    let data = query
        .offset(offset)
        .limit(page.page_size().min(MAX_BOUND))
        .all(conn)
        .await?;

    Ok(PaginatedItems { total_count, data })
}
