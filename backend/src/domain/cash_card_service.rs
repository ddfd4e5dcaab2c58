//! Owner-scoped cash card service.
//!
//! Implements the [`CashCardQuery`] and [`CashCardCommand`] driving ports on
//! top of any [`CashCardRepository`]. Every operation is scoped to the
//! calling owner, and a card owned by someone else is reported exactly like a
//! card that does not exist.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::PageRequest;
use tracing::{debug, error};

use crate::domain::ports::{
    CashCardCommand, CashCardQuery, CashCardRepository, CashCardRepositoryError,
    ListCashCardsRequest,
};
use crate::domain::{
    CashCard, CashCardDraft, CashCardId, Error, ListingDefaults, NewCashCard, Owner,
};

const CARD_NOT_FOUND: &str = "cash card not found";

fn not_found() -> Error {
    Error::not_found(CARD_NOT_FOUND)
}

fn map_repository_error(err: CashCardRepositoryError) -> Error {
    error!(error = %err, "cash card repository failed");
    Error::internal(format!("cash card repository error: {err}"))
}

/// Cash card service implementing the card query and command ports.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use cashcard::domain::{CashCardDraft, CashCardService, ListingDefaults, Owner};
/// use cashcard::domain::ports::CashCardCommand;
/// use cashcard::outbound::memory::InMemoryCashCardRepository;
/// use rust_decimal::Decimal;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let service = CashCardService::new(
///     Arc::new(InMemoryCashCardRepository::new()),
///     ListingDefaults::default(),
/// );
/// let sarah = Owner::new("sarah").expect("owner");
/// let card = service
///     .create_card(CashCardDraft::new(Decimal::new(250, 2)), &sarah)
///     .await
///     .expect("created");
/// assert_eq!(card.owner(), &sarah);
/// # });
/// ```
#[derive(Clone)]
pub struct CashCardService<R> {
    repo: Arc<R>,
    defaults: ListingDefaults,
}

impl<R> CashCardService<R> {
    /// Create a service over `repo` using `defaults` for unset listing
    /// parameters.
    pub fn new(repo: Arc<R>, defaults: ListingDefaults) -> Self {
        Self { repo, defaults }
    }

    /// Listing defaults this service applies.
    pub fn defaults(&self) -> &ListingDefaults {
        &self.defaults
    }

    fn page_request(&self, request: &ListCashCardsRequest) -> Result<PageRequest, Error> {
        let index = request.page.unwrap_or(0);
        let size = request.size.unwrap_or(self.defaults.page_size.get());
        PageRequest::bounded(index, size, self.defaults.max_page_size.get()).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(serde_json::json!({
                "field": "size",
                "code": "invalid_page_size",
                "value": size,
            }))
        })
    }
}

#[async_trait]
impl<R> CashCardQuery for CashCardService<R>
where
    R: CashCardRepository,
{
    async fn get_card(&self, id: CashCardId, caller: &Owner) -> Result<CashCard, Error> {
        self.repo
            .find_by_id_and_owner(id, caller)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)
    }

    async fn list_cards(
        &self,
        request: ListCashCardsRequest,
        caller: &Owner,
    ) -> Result<Vec<CashCard>, Error> {
        let page = self.page_request(&request)?;
        let sort = request.sort.unwrap_or(self.defaults.sort);
        self.repo
            .find_page_by_owner(caller, page, sort)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> CashCardCommand for CashCardService<R>
where
    R: CashCardRepository,
{
    async fn create_card(&self, draft: CashCardDraft, caller: &Owner) -> Result<CashCard, Error> {
        let card = NewCashCard::new(draft.amount(), caller.clone());
        let created = self
            .repo
            .insert(&card)
            .await
            .map_err(map_repository_error)?;
        debug!(card_id = %created.id(), owner = %caller, "cash card created");
        Ok(created)
    }

    async fn update_card(
        &self,
        id: CashCardId,
        draft: CashCardDraft,
        caller: &Owner,
    ) -> Result<(), Error> {
        let existing = self
            .repo
            .find_by_id_and_owner(id, caller)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)?;
        let updated = CashCard::new(existing.id(), draft.amount(), caller.clone());
        // `None` means the card was deleted after the lookup above.
        self.repo
            .save(&updated)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(not_found)?;
        Ok(())
    }

    async fn delete_card(&self, id: CashCardId, caller: &Owner) -> Result<(), Error> {
        let owned = self
            .repo
            .exists_by_id_and_owner(id, caller)
            .await
            .map_err(map_repository_error)?;
        if !owned {
            return Err(not_found());
        }
        let removed = self
            .repo
            .delete_by_id(id)
            .await
            .map_err(map_repository_error)?;
        if !removed {
            return Err(not_found());
        }
        debug!(card_id = %id, owner = %caller, "cash card deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "cash_card_service_tests.rs"]
mod tests;
