//! Cash card records and the listing configuration used to read them.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use pagination::{Direction, SortOrder, SortParseError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Owner;

/// Store-assigned cash card identifier.
///
/// Identifiers are allocated monotonically and never reused after a delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashCardId(i64);

impl CashCardId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for CashCardId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for CashCardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted cash card.
///
/// # Examples
/// ```
/// use cashcard::domain::{CashCard, CashCardId, Owner};
/// use rust_decimal::Decimal;
///
/// let owner = Owner::new("sarah").expect("owner");
/// let card = CashCard::new(CashCardId::new(99), Decimal::new(12345, 2), owner);
/// assert_eq!(card.amount().to_string(), "123.45");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashCard {
    id: CashCardId,
    amount: Decimal,
    owner: Owner,
}

impl CashCard {
    /// Assemble a stored card from its parts.
    pub fn new(id: CashCardId, amount: Decimal, owner: Owner) -> Self {
        Self { id, amount, owner }
    }

    /// Identifier assigned by the store.
    pub fn id(&self) -> CashCardId {
        self.id
    }

    /// Monetary balance held on the card.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Owner every read and write is scoped to.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }
}

/// A card that has not been stored yet, so carries no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCashCard {
    amount: Decimal,
    owner: Owner,
}

impl NewCashCard {
    /// Card awaiting insertion for `owner`.
    pub fn new(amount: Decimal, owner: Owner) -> Self {
        Self { amount, owner }
    }

    /// Amount to store.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Owner the card will belong to.
    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Attach the identifier assigned by the store.
    pub fn into_card(self, id: CashCardId) -> CashCard {
        CashCard::new(id, self.amount, self.owner)
    }
}

/// Caller-supplied card contents.
///
/// Only the amount is taken from callers; identifier and owner are always
/// decided server side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashCardDraft {
    amount: Decimal,
}

impl CashCardDraft {
    /// Draft carrying only the requested amount.
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Requested amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

/// Fields a card listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CashCardSortField {
    Amount,
    Id,
}

impl CashCardSortField {
    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Id => "id",
        }
    }
}

impl fmt::Display for CashCardSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CashCardSortField {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amount" => Ok(Self::Amount),
            "id" => Ok(Self::Id),
            "" => Err(SortParseError::Empty),
            other => Err(SortParseError::UnknownField {
                field: other.to_owned(),
            }),
        }
    }
}

/// Ordering applied to card listings.
pub type CashCardSort = SortOrder<CashCardSortField>;

/// Page size used when a listing does not ask for one.
pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(20) {
    Some(size) => size,
    None => unreachable!(),
};

/// Largest page a caller may request.
pub const DEFAULT_MAX_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(100) {
    Some(size) => size,
    None => unreachable!(),
};

/// Values applied when a listing request leaves paging or ordering unset.
///
/// # Examples
/// ```
/// use cashcard::domain::{CashCardSortField, ListingDefaults};
/// use pagination::Direction;
///
/// let defaults = ListingDefaults::default();
/// assert_eq!(*defaults.sort.field(), CashCardSortField::Amount);
/// assert_eq!(defaults.sort.direction(), Direction::Ascending);
/// assert_eq!(defaults.page_size.get(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingDefaults {
    /// Ordering when the request names none.
    pub sort: CashCardSort,
    /// Page size when the request names none.
    pub page_size: NonZeroU32,
    /// Largest page size a request may ask for.
    pub max_page_size: NonZeroU32,
}

impl Default for ListingDefaults {
    fn default() -> Self {
        Self {
            sort: SortOrder::new(CashCardSortField::Amount, Direction::Ascending),
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}
