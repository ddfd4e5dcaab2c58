//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! when a migration changes the table.

diesel::table! {
    /// Owner-scoped cash cards.
    cash_cards (id) {
        /// Primary key assigned from a sequence.
        id -> Int8,
        /// Card balance.
        amount -> Numeric,
        /// Username of the account that created the card.
        #[max_length = 256]
        owner -> Varchar,
    }
}
