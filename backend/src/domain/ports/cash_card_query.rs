//! Driving port for cash card reads.

use async_trait::async_trait;

use crate::domain::{CashCard, CashCardId, CashCardSort, Error, Owner};

/// Paging and ordering requested by a caller. Unset fields fall back to the
/// service's listing defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCashCardsRequest {
    /// Zero-based page index.
    pub page: Option<u32>,
    /// Cards per page.
    pub size: Option<u32>,
    /// Ordering of the page.
    pub sort: Option<CashCardSort>,
}

/// Read operations over the caller's own cash cards.
///
/// Cards belonging to someone else are reported exactly like cards that do
/// not exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CashCardQuery: Send + Sync {
    /// Fetch one card owned by `caller`.
    async fn get_card(&self, id: CashCardId, caller: &Owner) -> Result<CashCard, Error>;

    /// List one page of the cards owned by `caller`.
    async fn list_cards(
        &self,
        request: ListCashCardsRequest,
        caller: &Owner,
    ) -> Result<Vec<CashCard>, Error>;
}
