//! HTTP inbound adapter exposing the REST endpoints.

pub mod auth;
pub mod cash_cards;
pub mod error;
pub mod health;
pub mod state;
pub mod validation;

pub use error::ApiResult;
