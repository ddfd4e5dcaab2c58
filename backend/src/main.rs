//! Cash card server entry-point: loads configuration, prepares storage, and
//! serves the REST endpoints, health probes, and OpenAPI docs.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cashcard::inbound::http::health::HealthState;
use cashcard::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use cashcard::settings::CashCardSettings;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = CashCardSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("load configuration: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let listing = settings.listing_defaults().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr, listing).with_demo_data(settings.seed_demo_data);
    if let Some(database_url) = settings.database_url() {
        let applied = run_pending_migrations(database_url)
            .await
            .map_err(|e| io::Error::other(format!("apply migrations: {e}")))?;
        info!(applied, "database migrations complete");
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(|e| io::Error::other(format!("create database pool: {e}")))?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting cash card server");
    create_server(health_state, config)?.await
}
