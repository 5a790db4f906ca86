//! Storage sessions - one per unit of work.
//!
//! A [`SessionProvider`] owns the connection pool for the process. Each inbound unit of
//! work acquires its own [`Session`], and every operation on that session runs inside a
//! transaction opened with [`Session::begin`]. Repositories only ever borrow the session's
//! connection or transaction.
//!
//! A `DatabaseTransaction` that is dropped without `commit` is rolled back by `SeaORM`,
//! so a transaction can never outlive the unit of work that opened it.

use crate::errors::Result;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use std::sync::Arc;
use tracing::trace;

/// Hands out storage sessions backed by a shared connection pool.
#[derive(Debug, Clone)]
pub struct SessionProvider {
    pool: Arc<DatabaseConnection>,
}

impl SessionProvider {
    /// Wraps an established connection pool.
    #[must_use]
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Acquires a session for one unit of work.
    #[must_use]
    pub fn acquire(&self) -> Session {
        trace!("Acquiring storage session");
        Session {
            conn: Arc::clone(&self.pool),
        }
    }
}

/// A storage session scoped to a single unit of work.
#[derive(Debug)]
pub struct Session {
    conn: Arc<DatabaseConnection>,
}

impl Session {
    /// Opens a transaction scope. Commit it explicitly; dropping it rolls back.
    pub async fn begin(&self) -> Result<DatabaseTransaction> {
        trace!("Beginning transaction");
        self.conn.begin().await.map_err(Into::into)
    }

    /// The session's underlying connection, for reads that need no transaction.
    #[must_use]
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
