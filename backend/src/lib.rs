//! Cash card service library.
//!
//! Owner-scoped cash card records exposed over HTTP Basic authenticated REST
//! endpoints. The crate follows a ports and adapters layout:
//!
//! - [`domain`] holds the entities, the owner-scoped service, and the port
//!   traits it depends on.
//! - [`inbound`] adapts HTTP requests onto the domain ports.
//! - [`outbound`] provides the in-memory and PostgreSQL card stores.

#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
