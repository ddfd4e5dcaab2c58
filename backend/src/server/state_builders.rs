//! Builders for the HTTP state ports.

use std::sync::Arc;

use actix_web::web;
use tracing::info;

use cashcard::domain::ports::{CashCardRepository, FixtureLoginService};
use cashcard::domain::{CashCardService, ListingDefaults};
use cashcard::inbound::http::state::HttpState;
use cashcard::outbound::memory::InMemoryCashCardRepository;
use cashcard::outbound::persistence::DieselCashCardRepository;

use super::ServerConfig;

/// Wrap a repository in the cash card service and expose it through both
/// the query and command ports.
fn state_for<R>(repo: Arc<R>, listing: ListingDefaults) -> HttpState
where
    R: CashCardRepository + 'static,
{
    let service = Arc::new(CashCardService::new(repo, listing));
    HttpState::new(Arc::new(FixtureLoginService), service.clone(), service)
}

/// Build the HTTP state, preferring PostgreSQL when a pool is configured.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("storing cash cards in PostgreSQL");
            state_for(
                Arc::new(DieselCashCardRepository::new(pool.clone())),
                config.listing,
            )
        }
        None if config.seed_demo_data => {
            info!("storing cash cards in memory with demo data");
            state_for(
                Arc::new(InMemoryCashCardRepository::with_demo_cards()),
                config.listing,
            )
        }
        None => {
            info!("storing cash cards in memory");
            state_for(Arc::new(InMemoryCashCardRepository::new()), config.listing)
        }
    };
    web::Data::new(state)
}
