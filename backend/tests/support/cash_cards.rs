//! Shared wiring for cash card HTTP scenarios.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, test, web};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cashcard::Trace;
use cashcard::domain::ports::FixtureLoginService;
use cashcard::domain::{CashCardService, ListingDefaults};
use cashcard::inbound::http::cash_cards::cash_card_scope;
use cashcard::inbound::http::state::HttpState;
use cashcard::outbound::memory::InMemoryCashCardRepository;

/// Demo account that owns cards 99, 100 and 101.
pub const SARAH: (&str, &str) = ("sarah", "abc123");
/// Demo account that owns card 102.
pub const KUMAR: (&str, &str) = ("kumar2", "xyz789");
/// Demo account without the card owner role.
pub const HANK: (&str, &str) = ("hank-owns-no-cards", "qrs456");

/// `Authorization` header for the given username and password.
pub fn basic_auth((username, password): (&str, &str)) -> (header::HeaderName, String) {
    (
        header::AUTHORIZATION,
        format!("Basic {}", STANDARD.encode(format!("{username}:{password}"))),
    )
}

/// Initialise the cash card app over the seeded in-memory store.
pub async fn init_app()
-> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let repo = Arc::new(InMemoryCashCardRepository::with_demo_cards());
    let service = Arc::new(CashCardService::new(repo, ListingDefaults::default()));
    let state = HttpState::new(Arc::new(FixtureLoginService), service.clone(), service);
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .service(cash_card_scope()),
    )
    .await
}
