//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`CashCardQuery`], [`CashCardCommand`], [`LoginService`])
//! are called by inbound adapters. The driven [`CashCardRepository`] port is
//! implemented by storage adapters and exposes typed errors built with
//! `define_port_error!`.

mod macros;
pub(crate) use macros::define_port_error;

mod cash_card_command;
mod cash_card_query;
mod cash_card_repository;
mod login_service;

#[cfg(test)]
pub use cash_card_command::MockCashCardCommand;
pub use cash_card_command::CashCardCommand;
#[cfg(test)]
pub use cash_card_query::MockCashCardQuery;
pub use cash_card_query::{CashCardQuery, ListCashCardsRequest};
#[cfg(test)]
pub use cash_card_repository::MockCashCardRepository;
pub use cash_card_repository::{CashCardRepository, CashCardRepositoryError};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{FixtureLoginService, LoginService};
