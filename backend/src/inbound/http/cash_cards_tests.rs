//! Handler tests for the cash card endpoints using port doubles.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rstest::rstest;
use rust_decimal::Decimal;
use serde_json::json;

use super::*;
use crate::domain::ports::{FixtureLoginService, MockCashCardCommand, MockCashCardQuery};
use crate::domain::{CashCardSortField, ErrorCode, Owner};

fn sarah_auth() -> (header::HeaderName, String) {
    (
        header::AUTHORIZATION,
        format!("Basic {}", STANDARD.encode("sarah:abc123")),
    )
}

fn sarah_card(id: i64, cents: i64) -> CashCard {
    CashCard::new(
        CashCardId::new(id),
        Decimal::new(cents, 2),
        Owner::new("sarah").expect("owner"),
    )
}

fn state(query: MockCashCardQuery, command: MockCashCardCommand) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(FixtureLoginService),
        Arc::new(query),
        Arc::new(command),
    ))
}

macro_rules! init_app {
    ($query:expr, $command:expr) => {
        test::init_service(
            App::new()
                .app_data(state($query, $command))
                .service(cash_card_scope()),
        )
        .await
    };
}

#[actix_web::test]
async fn get_returns_card_json() {
    let mut query = MockCashCardQuery::new();
    query
        .expect_get_card()
        .withf(|id, caller| *id == CashCardId::new(99) && caller.as_ref() == "sarah")
        .times(1)
        .return_once(|_, _| Ok(sarah_card(99, 12_345)));
    let app = init_app!(query, MockCashCardCommand::new());

    let req = test::TestRequest::get()
        .uri("/cashcards/99")
        .insert_header(sarah_auth())
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "id": 99, "amount": 123.45, "owner": "sarah" }));
}

#[actix_web::test]
async fn non_numeric_id_is_not_found() {
    let mut query = MockCashCardQuery::new();
    query.expect_get_card().times(0);
    let app = init_app!(query, MockCashCardCommand::new());

    let req = test::TestRequest::get()
        .uri("/cashcards/abc")
        .insert_header(sarah_auth())
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn list_forwards_parsed_paging() {
    let mut query = MockCashCardQuery::new();
    query
        .expect_list_cards()
        .withf(|request, _| {
            request.page == Some(0)
                && request.size == Some(1)
                && request
                    .sort
                    .is_some_and(|sort| *sort.field() == CashCardSortField::Amount)
        })
        .times(1)
        .return_once(|_, _| Ok(vec![sarah_card(101, 15_000)]));
    let app = init_app!(query, MockCashCardCommand::new());

    let req = test::TestRequest::get()
        .uri("/cashcards?page=0&size=1&sort=amount,desc")
        .insert_header(sarah_auth())
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Vec<CashCardBody> = test::read_body_json(res).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body.first().map(|card| card.id), Some(101));
}

#[rstest]
#[case("/cashcards?size=abc", "size")]
#[case("/cashcards?page=-1", "page")]
#[case("/cashcards?sort=owner,asc", "sort")]
#[actix_web::test]
async fn list_rejects_malformed_parameters(#[case] uri: &str, #[case] field: &str) {
    let mut query = MockCashCardQuery::new();
    query.expect_list_cards().times(0);
    let app = init_app!(query, MockCashCardCommand::new());

    let req = test::TestRequest::get()
        .uri(uri)
        .insert_header(sarah_auth())
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], field);
}

#[actix_web::test]
async fn create_ignores_client_id_and_owner() {
    let mut command = MockCashCardCommand::new();
    command
        .expect_create_card()
        .withf(|draft, caller| {
            draft.amount() == Decimal::new(25_000, 2) && caller.as_ref() == "sarah"
        })
        .times(1)
        .return_once(|draft, caller| {
            Ok(CashCard::new(
                CashCardId::new(103),
                draft.amount(),
                caller.clone(),
            ))
        });
    let app = init_app!(MockCashCardQuery::new(), command);

    let req = test::TestRequest::post()
        .uri("/cashcards")
        .insert_header(sarah_auth())
        .set_json(json!({ "id": 1, "amount": 250.00, "owner": "kumar2" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .expect("location header");
    assert!(location.ends_with("/cashcards/103"), "location was {location}");
}

#[rstest]
#[case(actix_web::http::Method::POST, "/cashcards")]
#[case(actix_web::http::Method::PUT, "/cashcards/99")]
#[actix_web::test]
async fn writes_without_amount_are_invalid(
    #[case] method: actix_web::http::Method,
    #[case] uri: &str,
) {
    let mut command = MockCashCardCommand::new();
    command.expect_create_card().times(0);
    command.expect_update_card().times(0);
    let app = init_app!(MockCashCardQuery::new(), command);

    let req = test::TestRequest::default()
        .method(method)
        .uri(uri)
        .insert_header(sarah_auth())
        .set_json(json!({ "owner": "sarah" }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], "amount");
}

#[actix_web::test]
async fn malformed_json_is_invalid_request() {
    let app = init_app!(MockCashCardQuery::new(), MockCashCardCommand::new());

    let req = test::TestRequest::post()
        .uri("/cashcards")
        .insert_header(sarah_auth())
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"amount\": ")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[case(Ok(()), StatusCode::NO_CONTENT)]
#[case(Err(ErrorCode::NotFound), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn update_maps_outcome(
    #[case] outcome: Result<(), ErrorCode>,
    #[case] expected: StatusCode,
) {
    let mut command = MockCashCardCommand::new();
    command
        .expect_update_card()
        .withf(|id, draft, caller| {
            *id == CashCardId::new(99)
                && draft.amount() == Decimal::new(1_999, 2)
                && caller.as_ref() == "sarah"
        })
        .times(1)
        .return_once(move |_, _, _| outcome.map_err(|code| Error::new(code, "cash card not found")));
    let app = init_app!(MockCashCardQuery::new(), command);

    let req = test::TestRequest::put()
        .uri("/cashcards/99")
        .insert_header(sarah_auth())
        .set_json(json!({ "amount": 19.99 }))
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), expected);
}

#[rstest]
#[case(Ok(()), StatusCode::NO_CONTENT)]
#[case(Err(ErrorCode::NotFound), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn delete_maps_outcome(
    #[case] outcome: Result<(), ErrorCode>,
    #[case] expected: StatusCode,
) {
    let mut command = MockCashCardCommand::new();
    command
        .expect_delete_card()
        .times(1)
        .return_once(move |_, _| outcome.map_err(|code| Error::new(code, "cash card not found")));
    let app = init_app!(MockCashCardQuery::new(), command);

    let req = test::TestRequest::delete()
        .uri("/cashcards/99")
        .insert_header(sarah_auth())
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), expected);
}

#[actix_web::test]
async fn unauthenticated_requests_never_reach_ports() {
    let mut query = MockCashCardQuery::new();
    query.expect_get_card().times(0);
    let app = init_app!(query, MockCashCardCommand::new());

    let req = test::TestRequest::get().uri("/cashcards/99").to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}
