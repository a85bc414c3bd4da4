use std::time::Duration;

use actix_web::http::{Method, StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};

use pushkind_users::endpoints::EndpointConfig;
use pushkind_users::endpoints::user::UserEndpoints;
use pushkind_users::routes::{self, RequestSettings};

mod common;

macro_rules! init_app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .wrap(routes::cors(None))
                .app_data(web::Data::new(UserEndpoints::new(
                    $test_db.repository(),
                    EndpointConfig::new("10"),
                )))
                .app_data(web::Data::new(RequestSettings {
                    timeout: Duration::from_secs(5),
                }))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_user_lifecycle_over_http() {
    let test_db = common::TestDb::new("test_user_lifecycle_over_http.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "first_name": "Ana",
            "last_name": "Lopez",
            "email": "ana@example.com",
            "phone": "555"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 201);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/users/{id}"))
        .set_json(json!({ "phone": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["phone"], "");
    assert_eq!(body["data"]["email"], "ana@example.com");

    let req = test::TestRequest::get()
        .uri("/users?first_name=AN&limit=abc&page=0")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["meta"],
        json!({ "page": 1, "limit": 10, "totalCount": 1, "totalPages": 1, "offset": 0 })
    );
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/users/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn test_validation_failure_is_bad_request() {
    let test_db = common::TestDb::new("test_validation_failure_is_bad_request.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "last_name": "Lopez" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["err"], "invalid first_name: first name is required");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request_envelope() {
    let test_db = common::TestDb::new("test_malformed_json_is_bad_request_envelope.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(header::ContentType::json())
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
    assert!(
        body["err"]
            .as_str()
            .unwrap()
            .starts_with("invalid request format: '")
    );
}

#[actix_web::test]
async fn test_unknown_user_is_not_found() {
    let test_db = common::TestDb::new("test_unknown_user_is_not_found.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::get().uri("/users/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["err"], "user 'nope' doesn't exist");
}

#[actix_web::test]
async fn test_cors_preflight_is_answered() {
    let test_db = common::TestDb::new("test_cors_preflight_is_answered.db");
    let app = init_app!(test_db);

    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/users")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert!(
        resp.headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
    let methods = resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(methods.contains("PATCH"), "{methods}");
}
