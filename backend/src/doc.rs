//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the cash card endpoints, the health probes, the
//! request and response bodies, and the HTTP Basic security scheme every
//! cash card route requires.
//!
//! The document is served by Swagger UI in debug builds and printed by the
//! `openapi-dump` binary for external tooling.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::cash_cards::{CashCardBody, CashCardRequestBody};

/// Name of the security scheme referenced by the cash card paths.
pub const BASIC_AUTH_SCHEME: &str = "BasicAuth";

/// Enrich the generated document with the HTTP Basic security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            BASIC_AUTH_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Basic)
                    .description(Some("Username and password of a card owner."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Cash card API",
        description = "Owner-scoped cash card records behind HTTP Basic authentication."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cash_cards::get_cash_card,
        crate::inbound::http::cash_cards::list_cash_cards,
        crate::inbound::http::cash_cards::create_cash_card,
        crate::inbound::http::cash_cards::update_cash_card,
        crate::inbound::http::cash_cards::delete_cash_card,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CashCardBody, CashCardRequestBody, Error, ErrorCode)),
    tags(
        (name = "cash-cards", description = "Cash cards owned by the authenticated caller"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
