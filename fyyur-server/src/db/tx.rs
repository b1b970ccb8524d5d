//! Commit-or-rollback for single-transaction mutations

use sqlx::{Postgres, Transaction};

use super::repos::DbError;

/// Close a transaction according to the outcome of its statements.
///
/// `Ok` commits; `Err` rolls back and hands the original error back. The
/// transaction is consumed either way, so the connection returns to the
/// pool before the caller sees the result.
pub async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    result: Result<T, DbError>,
) -> Result<T, DbError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Rollback failed");
            }
            Err(err)
        }
    }
}
