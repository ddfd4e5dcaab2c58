//! End-to-end HTTP scenarios for the cash card endpoints over the demo data.

#[path = "support/cash_cards.rs"]
mod cards_support;

use actix_web::http::{StatusCode, header};
use actix_web::test::{self, TestRequest};
use cards_support::{HANK, KUMAR, SARAH, basic_auth, init_app};
use cashcard::domain::TRACE_ID_HEADER;
use rstest::rstest;
use serde_json::{Value, json};

fn amounts(body: &Value) -> Vec<f64> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|card| card["amount"].as_f64().expect("numeric amount"))
        .collect()
}

fn location_path(location: &str) -> String {
    url::Url::parse(location)
        .map(|url| url.path().to_owned())
        .unwrap_or_else(|_| location.to_owned())
}

#[actix_web::test]
async fn owner_reads_their_card() {
    let app = init_app().await;

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri("/cashcards/99")
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({ "id": 99, "amount": 123.45, "owner": "sarah" }));
}

#[rstest]
#[case("/cashcards/1000")]
#[case("/cashcards/102")]
#[actix_web::test]
async fn unknown_and_foreign_cards_look_the_same(#[case] uri: &str) {
    let app = init_app().await;

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri(uri)
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "cash card not found");
}

#[rstest]
#[case(Some(("sarah", "BAD-PASSWORD")))]
#[case(Some(("BAD-USER", "abc123")))]
#[case(None)]
#[actix_web::test]
async fn bad_credentials_are_challenged(#[case] credentials: Option<(&str, &str)>) {
    let app = init_app().await;
    let mut req = TestRequest::get().uri("/cashcards/99");
    if let Some(credentials) = credentials {
        req = req.insert_header(basic_auth(credentials));
    }

    let res = test::call_service(&app, req.to_request()).await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[actix_web::test]
async fn non_owner_role_is_forbidden() {
    let app = init_app().await;

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri("/cashcards/99")
            .insert_header(basic_auth(HANK))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::FORBIDDEN);
}

#[rstest]
#[case("/cashcards", vec![1.00, 123.45, 150.00])]
#[case("/cashcards?page=0&size=1&sort=amount,desc", vec![150.00])]
#[case("/cashcards?page=1&size=2&sort=amount,asc", vec![150.00])]
#[case("/cashcards?sort=id,desc", vec![150.00, 1.00, 123.45])]
#[case("/cashcards?page=5&size=10", vec![])]
#[actix_web::test]
async fn listing_pages_only_the_callers_cards(#[case] uri: &str, #[case] expected: Vec<f64>) {
    let app = init_app().await;

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri(uri)
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(amounts(&body), expected);
    assert!(
        body.as_array()
            .expect("array body")
            .iter()
            .all(|card| card["owner"] == "sarah")
    );
}

#[rstest]
#[case("/cashcards?size=0")]
#[case("/cashcards?size=101")]
#[case("/cashcards?sort=owner,asc")]
#[case("/cashcards?page=x")]
#[actix_web::test]
async fn invalid_paging_is_rejected(#[case] uri: &str) {
    let app = init_app().await;

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri(uri)
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[actix_web::test]
async fn created_card_is_reachable_through_location() {
    let app = init_app().await;

    let created = test::call_service(
        &app,
        TestRequest::post()
            .uri("/cashcards")
            .insert_header(basic_auth(SARAH))
            .set_json(json!({ "amount": 250.00, "owner": "kumar2" }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let location = created
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(location_path)
        .expect("location header");

    let res = test::call_service(
        &app,
        TestRequest::get()
            .uri(&location)
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["amount"], 250.0);
    assert_eq!(body["owner"], "sarah");
    assert_ne!(body["id"], json!(null));
}

#[actix_web::test]
async fn update_replaces_amount_for_owner_only() {
    let app = init_app().await;

    let updated = test::call_service(
        &app,
        TestRequest::put()
            .uri("/cashcards/99")
            .insert_header(basic_auth(SARAH))
            .set_json(json!({ "amount": 19.99 }))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::NO_CONTENT);

    let foreign = test::call_service(
        &app,
        TestRequest::put()
            .uri("/cashcards/102")
            .insert_header(basic_auth(SARAH))
            .set_json(json!({ "amount": 333.33 }))
            .to_request(),
    )
    .await;
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);

    let mine = test::call_service(
        &app,
        TestRequest::get()
            .uri("/cashcards/99")
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;
    let mine: Value = test::read_body_json(mine).await;
    assert_eq!(mine, json!({ "id": 99, "amount": 19.99, "owner": "sarah" }));

    let kumars = test::call_service(
        &app,
        TestRequest::get()
            .uri("/cashcards/102")
            .insert_header(basic_auth(KUMAR))
            .to_request(),
    )
    .await;
    let kumars: Value = test::read_body_json(kumars).await;
    assert_eq!(kumars["amount"], 200.0);
}

#[actix_web::test]
async fn delete_removes_only_the_callers_card() {
    let app = init_app().await;

    let foreign = test::call_service(
        &app,
        TestRequest::delete()
            .uri("/cashcards/102")
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;
    assert_eq!(foreign.status(), StatusCode::NOT_FOUND);

    let deleted = test::call_service(
        &app,
        TestRequest::delete()
            .uri("/cashcards/99")
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let again = test::call_service(
        &app,
        TestRequest::delete()
            .uri("/cashcards/99")
            .insert_header(basic_auth(SARAH))
            .to_request(),
    )
    .await;
    assert_eq!(again.status(), StatusCode::NOT_FOUND);

    let kumars = test::call_service(
        &app,
        TestRequest::get()
            .uri("/cashcards/102")
            .insert_header(basic_auth(KUMAR))
            .to_request(),
    )
    .await;
    assert_eq!(kumars.status(), StatusCode::OK);
}

#[actix_web::test]
async fn deleted_ids_are_never_handed_out_again() {
    let app = init_app().await;
    let mut ids = Vec::new();

    for _ in 0..2 {
        let created = test::call_service(
            &app,
            TestRequest::post()
                .uri("/cashcards")
                .insert_header(basic_auth(SARAH))
                .set_json(json!({ "amount": 5.00 }))
                .to_request(),
        )
        .await;
        let location = created
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(location_path)
            .expect("location header");
        let deleted = test::call_service(
            &app,
            TestRequest::delete()
                .uri(&location)
                .insert_header(basic_auth(SARAH))
                .to_request(),
        )
        .await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
        ids.push(location);
    }

    assert_ne!(ids.first(), ids.get(1));
}
