//! Domain primitives, ports and services.
//!
//! Purpose: define the owner-scoped cash card model and the rules for reading
//! and mutating it, independent of HTTP or storage details.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - CashCard, NewCashCard, CashCardDraft: the record in its lifecycle stages.
//! - Owner: identity every card is scoped to.
//! - CashCardService: implements the card query and command ports.
//! - TraceId: per-request correlation identifier.

pub mod auth;
pub mod cash_card;
pub mod cash_card_service;
pub mod error;
pub mod owner;
pub mod ports;
pub mod trace_id;

pub use self::auth::{AuthenticatedUser, LoginCredentials, LoginValidationError, Role};
pub use self::cash_card::{
    CashCard, CashCardDraft, CashCardId, CashCardSort, CashCardSortField, DEFAULT_MAX_PAGE_SIZE,
    DEFAULT_PAGE_SIZE, ListingDefaults, NewCashCard,
};
pub use self::cash_card_service::CashCardService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::owner::{Owner, OwnerValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

