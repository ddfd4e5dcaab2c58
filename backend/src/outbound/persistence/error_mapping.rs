//! Translation of pool and Diesel failures into repository errors.
//!
//! Database messages can echo SQL or connection strings, so they are logged
//! at debug level and replaced with fixed text in the returned error.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::CashCardRepositoryError;

use super::pool::PoolError;

pub(super) fn pool_failure(error: PoolError) -> CashCardRepositoryError {
    debug!(%error, "database pool unavailable");
    CashCardRepositoryError::connection(error.message())
}

pub(super) fn diesel_failure(error: DieselError) -> CashCardRepositoryError {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, detail = info.message(), "cash card query rejected by database");
            match kind {
                DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand => {
                    CashCardRepositoryError::connection("database connection lost")
                }
                DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation => {
                    CashCardRepositoryError::query("cash card violates a table constraint")
                }
                _ => CashCardRepositoryError::query("database error"),
            }
        }
        other => {
            debug!(error = %other, "cash card query failed");
            CashCardRepositoryError::query("database query failed")
        }
    }
}
