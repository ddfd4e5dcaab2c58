//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain types.

use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::cash_cards;

/// Row struct for reading from the cash_cards table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = cash_cards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CashCardRow {
    pub id: i64,
    pub amount: Decimal,
    pub owner: String,
}

/// Insertable struct for new cards; the id comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = cash_cards)]
pub(crate) struct NewCashCardRow<'a> {
    pub amount: Decimal,
    pub owner: &'a str,
}

/// Changeset for overwriting an existing card.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = cash_cards)]
pub(crate) struct CashCardUpdate<'a> {
    pub amount: Decimal,
    pub owner: &'a str,
}
