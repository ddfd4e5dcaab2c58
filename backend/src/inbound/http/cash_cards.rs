//! Cash card HTTP handlers.
//!
//! ```text
//! GET    /cashcards/{id}
//! GET    /cashcards?page=&size=&sort=field,dir
//! POST   /cashcards
//! PUT    /cashcards/{id}
//! DELETE /cashcards/{id}
//! ```
//!
//! Every route requires a caller with the card owner role and only ever sees
//! that caller's cards.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Scope, delete, get, post, put, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::ListCashCardsRequest;
use crate::domain::{CashCard, CashCardDraft, CashCardId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::CardOwner;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_body_error, missing_field_error, parse_optional_sort, parse_optional_u32,
};

/// Route name used to build `Location` headers.
pub const CASH_CARD_ROUTE: &str = "cash_card";

/// Cash card as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CashCardBody {
    #[schema(example = 99)]
    pub id: i64,
    #[schema(value_type = f64, example = 123.45)]
    pub amount: Decimal,
    #[schema(example = "sarah")]
    pub owner: String,
}

impl From<CashCard> for CashCardBody {
    fn from(card: CashCard) -> Self {
        Self {
            id: card.id().get(),
            amount: card.amount(),
            owner: card.owner().to_string(),
        }
    }
}

/// Request payload for creating or replacing a card.
///
/// `id` and `owner` are accepted so clients can send back a card they read,
/// but both are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct CashCardRequestBody {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 250.00)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub owner: Option<String>,
}

impl CashCardRequestBody {
    fn into_draft(self) -> Result<CashCardDraft, Error> {
        self.amount
            .map(CashCardDraft::new)
            .ok_or_else(|| missing_field_error(FieldName::new("amount")))
    }
}

/// Paging and sorting query parameters.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCashCardsParams {
    /// Zero-based page index.
    #[param(example = "0")]
    pub page: Option<String>,
    /// Page size, at least 1.
    #[param(example = "20")]
    pub size: Option<String>,
    /// `field,direction` where field is `amount` or `id` and direction is
    /// `asc` or `desc`.
    #[param(example = "amount,desc")]
    pub sort: Option<String>,
}

impl ListCashCardsParams {
    fn into_request(self) -> Result<ListCashCardsRequest, Error> {
        Ok(ListCashCardsRequest {
            page: parse_optional_u32(self.page.as_deref(), FieldName::new("page"))?,
            size: parse_optional_u32(self.size.as_deref(), FieldName::new("size"))?,
            sort: parse_optional_sort(self.sort.as_deref())?,
        })
    }
}

fn card_not_found() -> Error {
    Error::not_found("cash card not found")
}

/// Build the `/cashcards` scope with its handlers and extractor settings.
///
/// A path id that is not an integer cannot name a card, so it is reported as
/// not found. Malformed bodies and query strings are invalid requests.
pub fn cash_card_scope() -> Scope {
    web::scope("/cashcards")
        .app_data(web::PathConfig::default().error_handler(|_, _| card_not_found().into()))
        .app_data(
            web::JsonConfig::default().error_handler(|err, _| invalid_body_error(err).into()),
        )
        .app_data(
            web::QueryConfig::default().error_handler(|err, _| invalid_body_error(err).into()),
        )
        .service(list_cash_cards)
        .service(create_cash_card)
        .service(get_cash_card)
        .service(update_cash_card)
        .service(delete_cash_card)
}

/// Fetch one of the caller's cards.
#[utoipa::path(
    get,
    path = "/cashcards/{id}",
    params(("id" = i64, Path, description = "Cash card id")),
    responses(
        (status = 200, description = "Cash card", body = CashCardBody),
        (status = 401, description = "Unauthorized", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No such card for this caller", body = Error)
    ),
    tags = ["cash-cards"],
    operation_id = "getCashCard",
    security(("BasicAuth" = []))
)]
#[get("/{id}", name = "cash_card")]
pub async fn get_cash_card(
    caller: CardOwner,
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<CashCardBody>> {
    let card = state
        .cards
        .get_card(CashCardId::new(id.into_inner()), caller.owner())
        .await?;
    Ok(web::Json(card.into()))
}

/// List a page of the caller's cards.
#[utoipa::path(
    get,
    path = "/cashcards",
    params(ListCashCardsParams),
    responses(
        (status = 200, description = "Page of cash cards", body = [CashCardBody]),
        (status = 400, description = "Invalid paging or sort", body = Error),
        (status = 401, description = "Unauthorized", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["cash-cards"],
    operation_id = "listCashCards",
    security(("BasicAuth" = []))
)]
#[get("")]
pub async fn list_cash_cards(
    caller: CardOwner,
    state: web::Data<HttpState>,
    params: web::Query<ListCashCardsParams>,
) -> ApiResult<web::Json<Vec<CashCardBody>>> {
    let request = params.into_inner().into_request()?;
    let cards = state.cards.list_cards(request, caller.owner()).await?;
    Ok(web::Json(cards.into_iter().map(CashCardBody::from).collect()))
}

/// Create a card owned by the caller.
#[utoipa::path(
    post,
    path = "/cashcards",
    request_body = CashCardRequestBody,
    responses(
        (status = 201, description = "Card created; Location points at it"),
        (status = 400, description = "Missing or invalid amount", body = Error),
        (status = 401, description = "Unauthorized", body = Error),
        (status = 403, description = "Forbidden", body = Error)
    ),
    tags = ["cash-cards"],
    operation_id = "createCashCard",
    security(("BasicAuth" = []))
)]
#[post("")]
pub async fn create_cash_card(
    caller: CardOwner,
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<CashCardRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    let card = state.card_commands.create_card(draft, caller.owner()).await?;
    let location = req
        .url_for(CASH_CARD_ROUTE, [card.id().to_string()])
        .map_err(|err| Error::internal(format!("failed to build card location: {err}")))?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location.as_str()))
        .finish())
}

/// Replace the amount of one of the caller's cards.
#[utoipa::path(
    put,
    path = "/cashcards/{id}",
    params(("id" = i64, Path, description = "Cash card id")),
    request_body = CashCardRequestBody,
    responses(
        (status = 204, description = "Card updated"),
        (status = 400, description = "Missing or invalid amount", body = Error),
        (status = 401, description = "Unauthorized", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No such card for this caller", body = Error)
    ),
    tags = ["cash-cards"],
    operation_id = "updateCashCard",
    security(("BasicAuth" = []))
)]
#[put("/{id}")]
pub async fn update_cash_card(
    caller: CardOwner,
    state: web::Data<HttpState>,
    id: web::Path<i64>,
    payload: web::Json<CashCardRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = payload.into_inner().into_draft()?;
    state
        .card_commands
        .update_card(CashCardId::new(id.into_inner()), draft, caller.owner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete one of the caller's cards.
#[utoipa::path(
    delete,
    path = "/cashcards/{id}",
    params(("id" = i64, Path, description = "Cash card id")),
    responses(
        (status = 204, description = "Card deleted"),
        (status = 401, description = "Unauthorized", body = Error),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No such card for this caller", body = Error)
    ),
    tags = ["cash-cards"],
    operation_id = "deleteCashCard",
    security(("BasicAuth" = []))
)]
#[delete("/{id}")]
pub async fn delete_cash_card(
    caller: CardOwner,
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .card_commands
        .delete_card(CashCardId::new(id.into_inner()), caller.owner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "cash_cards_tests.rs"]
mod tests;
