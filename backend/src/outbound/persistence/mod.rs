//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain types and hold no
//! business rules. Connections come from a `bb8` pool through `diesel-async`;
//! row structs (`models.rs`) and table definitions (`schema.rs`) stay private
//! to this module.
//!
//! # Example
//!
//! ```ignore
//! use cashcard::outbound::persistence::{DbPool, DieselCashCardRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/cashcard")).await?;
//! let repo = DieselCashCardRepository::new(pool);
//! ```

mod diesel_cash_card_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_cash_card_repository::DieselCashCardRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
