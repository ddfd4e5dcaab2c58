//! In-process cash card store.
//!
//! Used when no database is configured and by tests. Identifiers come from a
//! counter that only moves forward, so a deleted card's id is never handed
//! out again.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use pagination::PageRequest;
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use crate::domain::ports::{CashCardRepository, CashCardRepositoryError};
use crate::domain::{
    CashCard, CashCardId, CashCardSort, CashCardSortField, NewCashCard, Owner,
};

#[derive(Debug)]
struct Store {
    cards: BTreeMap<CashCardId, CashCard>,
    next_id: i64,
}

/// Cash card repository backed by a mutex-guarded map.
///
/// # Examples
/// ```
/// use cashcard::domain::{CashCardId, Owner};
/// use cashcard::domain::ports::CashCardRepository;
/// use cashcard::outbound::memory::InMemoryCashCardRepository;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let repo = InMemoryCashCardRepository::with_demo_cards();
/// let sarah = Owner::new("sarah").expect("owner");
/// let card = repo
///     .find_by_id_and_owner(CashCardId::new(99), &sarah)
///     .await
///     .expect("lookup");
/// assert!(card.is_some());
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryCashCardRepository {
    store: Mutex<Store>,
}

/// First identifier handed out by an empty store.
const FIRST_ID: i64 = 1;

impl InMemoryCashCardRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::from_cards(Vec::new())
    }

    /// Store seeded with existing cards. New ids start after the largest one.
    pub fn from_cards(cards: impl IntoIterator<Item = CashCard>) -> Self {
        let cards: BTreeMap<CashCardId, CashCard> =
            cards.into_iter().map(|card| (card.id(), card)).collect();
        let next_id = cards
            .keys()
            .next_back()
            .map_or(FIRST_ID, |id| id.get().saturating_add(1));
        Self {
            store: Mutex::new(Store { cards, next_id }),
        }
    }

    /// Store seeded with the demo cards for `sarah` and `kumar2`.
    pub fn with_demo_cards() -> Self {
        Self::from_cards(demo_cards())
    }
}

impl Default for InMemoryCashCardRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo data: three cards for `sarah` (ids 99 to 101) and one for `kumar2`
/// (id 102).
pub fn demo_cards() -> Vec<CashCard> {
    let seed = [
        (99, Decimal::new(12_345, 2), "sarah"),
        (100, Decimal::new(100, 2), "sarah"),
        (101, Decimal::new(15_000, 2), "sarah"),
        (102, Decimal::new(20_000, 2), "kumar2"),
    ];
    seed.into_iter()
        .filter_map(|(id, amount, owner)| {
            Owner::new(owner)
                .ok()
                .map(|owner| CashCard::new(CashCardId::new(id), amount, owner))
        })
        .collect()
}

fn compare(a: &CashCard, b: &CashCard, sort: &CashCardSort) -> Ordering {
    let primary = match sort.field() {
        CashCardSortField::Amount => a.amount().cmp(&b.amount()),
        CashCardSortField::Id => a.id().cmp(&b.id()),
    };
    sort.direction()
        .orient(primary)
        .then_with(|| a.id().cmp(&b.id()))
}

#[async_trait]
impl CashCardRepository for InMemoryCashCardRepository {
    async fn find_by_id_and_owner(
        &self,
        id: CashCardId,
        owner: &Owner,
    ) -> Result<Option<CashCard>, CashCardRepositoryError> {
        let store = self.store.lock().await;
        Ok(store
            .cards
            .get(&id)
            .filter(|card| card.owner() == owner)
            .cloned())
    }

    async fn find_page_by_owner(
        &self,
        owner: &Owner,
        page: PageRequest,
        sort: CashCardSort,
    ) -> Result<Vec<CashCard>, CashCardRepositoryError> {
        let mut owned: Vec<CashCard> = {
            let store = self.store.lock().await;
            store
                .cards
                .values()
                .filter(|card| card.owner() == owner)
                .cloned()
                .collect()
        };
        owned.sort_by(|a, b| compare(a, b, &sort));
        let window = page.window(owned.len());
        Ok(owned.drain(window).collect())
    }

    async fn exists_by_id_and_owner(
        &self,
        id: CashCardId,
        owner: &Owner,
    ) -> Result<bool, CashCardRepositoryError> {
        let store = self.store.lock().await;
        Ok(store.cards.get(&id).is_some_and(|card| card.owner() == owner))
    }

    async fn insert(&self, card: &NewCashCard) -> Result<CashCard, CashCardRepositoryError> {
        let mut store = self.store.lock().await;
        let id = CashCardId::new(store.next_id);
        store.next_id = store
            .next_id
            .checked_add(1)
            .ok_or_else(|| CashCardRepositoryError::query("cash card ids exhausted"))?;
        let created = card.clone().into_card(id);
        store.cards.insert(id, created.clone());
        Ok(created)
    }

    async fn save(&self, card: &CashCard) -> Result<Option<CashCard>, CashCardRepositoryError> {
        let mut store = self.store.lock().await;
        Ok(store.cards.get_mut(&card.id()).map(|slot| {
            *slot = card.clone();
            card.clone()
        }))
    }

    async fn delete_by_id(&self, id: CashCardId) -> Result<bool, CashCardRepositoryError> {
        let mut store = self.store.lock().await;
        Ok(store.cards.remove(&id).is_some())
    }
}
