//! Driving port for cash card mutations.

use async_trait::async_trait;

use crate::domain::{CashCard, CashCardDraft, CashCardId, Error, Owner};

/// Write operations over the caller's own cash cards.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CashCardCommand: Send + Sync {
    /// Create a card owned by `caller` and return it with its new id.
    async fn create_card(&self, draft: CashCardDraft, caller: &Owner) -> Result<CashCard, Error>;

    /// Replace the amount of a card owned by `caller`.
    async fn update_card(
        &self,
        id: CashCardId,
        draft: CashCardDraft,
        caller: &Owner,
    ) -> Result<(), Error>;

    /// Delete a card owned by `caller`.
    async fn delete_card(&self, id: CashCardId, caller: &Owner) -> Result<(), Error>;
}
