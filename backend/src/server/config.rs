//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use cashcard::domain::ListingDefaults;
use cashcard::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) listing: ListingDefaults,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_demo_data: bool,
}

impl ServerConfig {
    /// Construct a server configuration with an empty in-memory card store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, listing: ListingDefaults) -> Self {
        Self {
            bind_addr,
            listing,
            db_pool: None,
            seed_demo_data: false,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, cards are stored in PostgreSQL and demo seeding is
    /// skipped.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Seed the demo cards into the in-memory store.
    #[must_use]
    pub fn with_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
