//! Driven port for cash card storage.
//!
//! Every read is scoped to an owner. Mutations operate by identifier and
//! report whether the row was still present so callers can detect records
//! that vanished between a check and the write.

use async_trait::async_trait;
use pagination::PageRequest;

use crate::domain::{CashCard, CashCardId, CashCardSort, NewCashCard, Owner};

use super::define_port_error;

define_port_error! {
    /// Errors raised by cash card repository adapters.
    pub enum CashCardRepositoryError {
        /// Repository connection could not be established.
        Connection => "cash card repository connection failed",
        /// Query or mutation failed during execution.
        Query => "cash card repository query failed",
    }
}

/// Owner-aware storage primitives for cash cards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CashCardRepository: Send + Sync {
    /// Find a card by id, but only if `owner` owns it.
    async fn find_by_id_and_owner(
        &self,
        id: CashCardId,
        owner: &Owner,
    ) -> Result<Option<CashCard>, CashCardRepositoryError>;

    /// Read one page of the cards owned by `owner`.
    ///
    /// Rows with equal sort keys are ordered by ascending id. Pages past the
    /// end are empty.
    async fn find_page_by_owner(
        &self,
        owner: &Owner,
        page: PageRequest,
        sort: CashCardSort,
    ) -> Result<Vec<CashCard>, CashCardRepositoryError>;

    /// Whether a card with `id` exists and belongs to `owner`.
    async fn exists_by_id_and_owner(
        &self,
        id: CashCardId,
        owner: &Owner,
    ) -> Result<bool, CashCardRepositoryError>;

    /// Store a new card, assigning a fresh identifier.
    async fn insert(&self, card: &NewCashCard) -> Result<CashCard, CashCardRepositoryError>;

    /// Overwrite the card with the same id.
    ///
    /// Returns `None` when no card with that id exists any more.
    async fn save(&self, card: &CashCard) -> Result<Option<CashCard>, CashCardRepositoryError>;

    /// Remove a card by id regardless of owner. Returns whether a row was removed.
    async fn delete_by_id(&self, id: CashCardId) -> Result<bool, CashCardRepositoryError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(CashCardRepositoryError::connection("refused"), "connection failed: refused")]
    #[case(CashCardRepositoryError::query("broken sql"), "query failed: broken sql")]
    fn errors_format_their_message(
        #[case] error: CashCardRepositoryError,
        #[case] expected: &str,
    ) {
        assert!(error.to_string().ends_with(expected));
    }
}
