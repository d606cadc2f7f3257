use futures_util::future::BoxFuture;
use sqlx::{PgConnection, PgPool, Result as SqlxResult};

pub type Db = PgPool;

/// Run one logical operation inside a single transaction.
///
/// The operation gets a connection scoped to the transaction; the transaction
/// commits when the operation returns `Ok`. On `Err` (or any other non-normal
/// exit) the transaction is dropped, which rolls it back, so no partial state
/// is ever observable outside the session. Sessions are never nested or
/// reused across operations.
pub async fn with_session<T, F>(db: &PgPool, op: F) -> SqlxResult<T>
where
    F: for<'s> FnOnce(&'s mut PgConnection) -> BoxFuture<'s, SqlxResult<T>>,
    T: Send,
{
    let mut tx = db.begin().await?;
    let value = op(&mut *tx).await?;
    tx.commit().await?;
    Ok(value)
}

/// Whether a store error is a unique-constraint violation.
///
/// The unique index is the authoritative conflict signal under concurrent
/// writers; callers translate this into a domain conflict response instead of
/// letting it propagate as a fault.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
