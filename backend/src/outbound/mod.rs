//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process card store used without a database and in tests.
//! - **persistence**: PostgreSQL repositories using Diesel.
//!
//! Adapters only translate between domain types and storage representations.

pub mod memory;
pub mod persistence;
