//! PostgreSQL-backed `CashCardRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{Int8, Numeric, Varchar};
use diesel_async::RunQueryDsl;
use pagination::{Direction, PageRequest};

use crate::domain::ports::{CashCardRepository, CashCardRepositoryError};
use crate::domain::{CashCard, CashCardId, CashCardSort, CashCardSortField, NewCashCard, Owner};

use super::error_mapping::{diesel_failure, pool_failure};
use super::models::{CashCardRow, CashCardUpdate, NewCashCardRow};
use super::pool::DbPool;
use super::schema::cash_cards;

/// Diesel-backed implementation of the cash card repository port.
#[derive(Clone)]
pub struct DieselCashCardRepository {
    pool: DbPool,
}

impl DieselCashCardRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_card(row: CashCardRow) -> Result<CashCard, CashCardRepositoryError> {
    let CashCardRow { id, amount, owner } = row;
    let owner = Owner::new(owner)
        .map_err(|err| CashCardRepositoryError::query(format!("stored owner is invalid: {err}")))?;
    Ok(CashCard::new(CashCardId::new(id), amount, owner))
}

type CardColumns = (Int8, Numeric, Varchar);
type BoxedCardQuery<'a> = cash_cards::BoxedQuery<'a, Pg, CardColumns>;

/// Apply the requested ordering with ascending id as the tie-breaker.
fn apply_sort(query: BoxedCardQuery<'_>, sort: CashCardSort) -> BoxedCardQuery<'_> {
    match (sort.field(), sort.direction()) {
        (CashCardSortField::Amount, Direction::Ascending) => {
            query.order((cash_cards::amount.asc(), cash_cards::id.asc()))
        }
        (CashCardSortField::Amount, Direction::Descending) => {
            query.order((cash_cards::amount.desc(), cash_cards::id.asc()))
        }
        (CashCardSortField::Id, Direction::Ascending) => query.order(cash_cards::id.asc()),
        (CashCardSortField::Id, Direction::Descending) => query.order(cash_cards::id.desc()),
    }
}

#[async_trait]
impl CashCardRepository for DieselCashCardRepository {
    async fn find_by_id_and_owner(
        &self,
        id: CashCardId,
        owner: &Owner,
    ) -> Result<Option<CashCard>, CashCardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_failure)?;
        let row = cash_cards::table
            .filter(cash_cards::id.eq(id.get()))
            .filter(cash_cards::owner.eq(owner.as_ref()))
            .select(CashCardRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_failure)?;
        row.map(row_to_card).transpose()
    }

    async fn find_page_by_owner(
        &self,
        owner: &Owner,
        page: PageRequest,
        sort: CashCardSort,
    ) -> Result<Vec<CashCard>, CashCardRepositoryError> {
        let offset = i64::try_from(page.offset())
            .map_err(|_| CashCardRepositoryError::query("page offset out of range"))?;
        let mut conn = self.pool.get().await.map_err(pool_failure)?;
        let query = cash_cards::table
            .filter(cash_cards::owner.eq(owner.as_ref()))
            .select((cash_cards::id, cash_cards::amount, cash_cards::owner))
            .into_boxed();
        let rows: Vec<CashCardRow> = apply_sort(query, sort)
            .limit(i64::from(page.size()))
            .offset(offset)
            .load(&mut conn)
            .await
            .map_err(diesel_failure)?;
        rows.into_iter().map(row_to_card).collect()
    }

    async fn exists_by_id_and_owner(
        &self,
        id: CashCardId,
        owner: &Owner,
    ) -> Result<bool, CashCardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_failure)?;
        diesel::select(diesel::dsl::exists(
            cash_cards::table
                .filter(cash_cards::id.eq(id.get()))
                .filter(cash_cards::owner.eq(owner.as_ref())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(diesel_failure)
    }

    async fn insert(&self, card: &NewCashCard) -> Result<CashCard, CashCardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_failure)?;
        let row = NewCashCardRow {
            amount: card.amount(),
            owner: card.owner().as_ref(),
        };
        let stored = diesel::insert_into(cash_cards::table)
            .values(&row)
            .returning(CashCardRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_failure)?;
        row_to_card(stored)
    }

    async fn save(&self, card: &CashCard) -> Result<Option<CashCard>, CashCardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_failure)?;
        let changes = CashCardUpdate {
            amount: card.amount(),
            owner: card.owner().as_ref(),
        };
        let stored = diesel::update(cash_cards::table.find(card.id().get()))
            .set(&changes)
            .returning(CashCardRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_failure)?;
        stored.map(row_to_card).transpose()
    }

    async fn delete_by_id(&self, id: CashCardId) -> Result<bool, CashCardRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_failure)?;
        let removed = diesel::delete(cash_cards::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(diesel_failure)?;
        Ok(removed > 0)
    }
}
