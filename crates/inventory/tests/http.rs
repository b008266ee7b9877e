use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use inventory::{
    di::{DependenciesInjectDeps, StoreDeps},
    handler::AppRouter,
    repository::memory::InMemoryStore,
    state::AppState,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

#[fixture]
fn app() -> Router {
    AppRouter::build(AppState::new(DependenciesInjectDeps {
        store: StoreDeps::Memory(InMemoryStore::new()),
    }))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn create_user(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        Some(json!({ "email": email, "name": "Clerk" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn create_product(app: &Router, quantity: i32) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/products",
        Some(json!({ "name": "Mouse", "price": 99.99, "quantity": quantity })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["id"].as_str().unwrap().to_string()
}

async fn adjust(app: &Router, product_id: &str, user_id: &str, delta: i32) -> (StatusCode, Value) {
    send(
        app,
        Method::PUT,
        "/products/adjust",
        Some(json!({ "productId": product_id, "quantity": delta, "userId": user_id })),
    )
    .await
}

#[rstest]
#[tokio::test]
async fn create_product_defaults_status_and_keeps_price(app: Router) {
    let (status, body) = send(
        &app,
        Method::POST,
        "/products",
        Some(json!({ "name": "Mouse", "price": 99.99, "quantity": 100 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["price"], json!(99.99));
    assert_eq!(body["data"]["quantity"], 100);
    assert_eq!(body["data"]["status"], "active");
}

#[rstest]
#[case::missing_name(json!({ "price": 1.0, "quantity": 1 }))]
#[case::negative_price(json!({ "name": "Mouse", "price": -1.0, "quantity": 1 }))]
#[case::negative_quantity(json!({ "name": "Mouse", "price": 1.0, "quantity": -1 }))]
#[case::empty_name(json!({ "name": "", "price": 1.0, "quantity": 1 }))]
#[tokio::test]
async fn invalid_products_are_bad_requests(app: Router, #[case] payload: Value) {
    let (status, body) = send(&app, Method::POST, "/products", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_conflict(app: Router) {
    create_user(&app, "dup@example.com").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/users",
        Some(json!({ "email": "dup@example.com", "name": "Again" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "User with this email already exists");
}

#[rstest]
#[tokio::test]
async fn adjust_updates_status_and_rejects_negative(app: Router) {
    let user_id = create_user(&app, "clerk@example.com").await;
    let product_id = create_product(&app, 100).await;

    let (status, body) = adjust(&app, &product_id, &user_id, 50).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["quantity"], 150);

    let (status, body) = adjust(&app, &product_id, &user_id, -200).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Adjustment would result in negative quantity");

    let (status, body) = send(&app, Method::GET, &format!("/status/{product_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["quantity"], 150);
}

#[rstest]
#[tokio::test]
async fn adjust_unknown_product_or_user_is_not_found(app: Router) {
    let user_id = create_user(&app, "clerk@example.com").await;
    let product_id = create_product(&app, 5).await;
    let missing = "0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b99";

    let (status, _) = adjust(&app, missing, &user_id, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = adjust(&app, &product_id, missing, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], format!("User with ID {missing} not found"));

    let (_, body) = send(&app, Method::GET, &format!("/status/{product_id}"), None).await;
    assert_eq!(body["data"]["quantity"], 5);
}

#[rstest]
#[case::not_an_object(r#"["productId"]"#)]
#[case::float_quantity(r#"{"productId":"0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b10","quantity":1.5,"userId":"0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b11"}"#)]
#[case::truncated(r#"{"productId":"#)]
#[tokio::test]
async fn malformed_adjust_body_is_bad_request(app: Router, #[case] raw: &str) {
    let request = Request::builder()
        .method(Method::PUT)
        .uri("/products/adjust")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn status_lookup_errors(app: Router) {
    let (status, body) = send(
        &app,
        Method::GET,
        "/status/0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b99",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "Product with ID 0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b99 not found"
    );

    let (status, body) = send(&app, Method::GET, "/status/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
}

#[rstest]
#[tokio::test]
async fn health_check_is_not_enveloped(app: Router) {
    let (status, body) = send(&app, Method::GET, "/status/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
    assert!(body.get("data").is_none());
}

#[rstest]
#[tokio::test]
async fn transactions_are_newest_first_and_product_filter_wins(app: Router) {
    let user_id = create_user(&app, "clerk@example.com").await;
    let other_user = create_user(&app, "other@example.com").await;
    let first = create_product(&app, 10).await;
    let second = create_product(&app, 10).await;

    adjust(&app, &first, &user_id, 1).await;
    adjust(&app, &first, &user_id, 2).await;
    adjust(&app, &second, &other_user, 3).await;

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/transactions?productId={first}&userId={other_user}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["quantity"], 2);
    assert_eq!(entries[1]["quantity"], 1);
    assert_eq!(entries[0]["type"], "adjustment");

    let (_, body) = send(&app, Method::GET, &format!("/transactions?userId={other_user}"), None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = send(&app, Method::GET, "/transactions?productId=&userId=", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[rstest]
#[case::unknown_product("/transactions?productId=0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b99")]
#[case::unknown_user("/transactions?userId=0195a3c2-7c1e-7b8a-9f00-5d2e4c1a9b99")]
#[tokio::test]
async fn unknown_filter_ids_give_empty_lists(app: Router, #[case] uri: &str) {
    let (status, body) = send(&app, Method::GET, uri, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[rstest]
#[tokio::test]
async fn malformed_filter_is_bad_request(app: Router) {
    let (status, _) = send(&app, Method::GET, "/transactions?productId=abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn metrics_and_docs_are_served(app: Router) {
    create_product(&app, 1).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(text.to_vec()).unwrap();
    assert!(text.contains("product_command_service_request_counter"));

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/products/adjust"].is_object());

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Inventory Management API");
}
