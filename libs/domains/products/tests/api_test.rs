//! End-to-end tests for the products API behind the full request pipeline:
//! API key authentication, validation, error translation and the
//! not-found fallback.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::auth::{API_KEY_HEADER, ApiKeyConfig};
use axum_helpers::server::create_router;
use core_config::server::ServerConfig;
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

const KEY: &str = "test-key";

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let service = ProductService::new(InMemoryProductRepository::new());
    let apis = Router::new().nest("/products", handlers::router(service));

    create_router::<ApiDoc>(
        apis,
        Router::new(),
        ApiKeyConfig::new(KEY).unwrap(),
        &ServerConfig::default(),
    )
    .unwrap()
}

fn request(method: &str, uri: &str, key: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(key) = key {
        builder = builder.header(API_KEY_HEADER, key);
    }
    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn widget() -> Value {
    json!({
        "name": "Widget",
        "description": "d",
        "price": 9.99,
        "category": "tools",
        "inStock": true
    })
}

#[tokio::test]
async fn test_missing_or_wrong_key_is_rejected_without_mutation() {
    let app = app();

    for key in [None, Some("wrong")] {
        let response = app
            .clone()
            .oneshot(request("POST", "/api/products", key, Some(widget())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            json_body(response.into_body()).await,
            json!({"status": "fail", "message": "Invalid API key"})
        );
    }

    let response = app
        .oneshot(request("GET", "/api/products/stats", Some(KEY), None))
        .await
        .unwrap();
    assert_eq!(json_body(response.into_body()).await["totalProducts"], 0);
}

#[tokio::test]
async fn test_every_api_route_requires_key() {
    let routes = [
        ("GET", "/api/products"),
        ("GET", "/api/products/some-id"),
        ("PUT", "/api/products/some-id"),
        ("DELETE", "/api/products/some-id"),
        ("GET", "/api/products/search?name=x"),
        ("GET", "/api/products/stats"),
        ("GET", "/api"),
        ("GET", "/api/unknown"),
    ];

    for (method, uri) in routes {
        let response = app()
            .oneshot(request(method, uri, None, None))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri}"
        );
    }
}

#[tokio::test]
async fn test_create_then_search() {
    let app = app();

    let response = app
        .clone()
        .oneshot(request("POST", "/api/products", Some(KEY), Some(widget())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_body(response.into_body()).await;
    assert!(created["id"].is_string());

    let response = app
        .oneshot(request(
            "GET",
            "/api/products/search?name=widg",
            Some(KEY),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([created]));
}

#[tokio::test]
async fn test_invalid_body_is_translated_to_fail() {
    let mut body = widget();
    body["price"] = json!(-5);

    let response = app()
        .oneshot(request("POST", "/api/products", Some(KEY), Some(body)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "fail", "message": "Price must be a positive number"})
    );
}

#[tokio::test]
async fn test_unmatched_routes_fall_through_to_not_found() {
    let response = app()
        .oneshot(request("GET", "/api/orders?x=1", Some(KEY), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        json_body(response.into_body()).await,
        json!({"status": "fail", "message": "Can't find /api/orders?x=1 on this server!"})
    );

    let response = app()
        .oneshot(request("PATCH", "/api/products", Some(KEY), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_trailing_slash_lists_products() {
    let app = app();
    app.clone()
        .oneshot(request("POST", "/api/products/", Some(KEY), Some(widget())))
        .await
        .unwrap();

    let response = app
        .oneshot(request("GET", "/api/products/", Some(KEY), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await["total"], 1);
}

#[tokio::test]
async fn test_non_utf8_id_gets_json_error_body() {
    for method in ["GET", "PUT", "DELETE"] {
        let body = (method == "PUT").then(widget);
        let response = app()
            .oneshot(request(method, "/api/products/%FF", Some(KEY), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method}");

        let error = json_body(response.into_body()).await;
        assert_eq!(error["status"], "fail");
        assert!(error["message"].as_str().unwrap().contains("UTF-8"));
    }
}

#[tokio::test]
async fn test_openapi_document_lists_product_routes() {
    let response = app()
        .oneshot(request("GET", "/api-docs/openapi.json", None, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = json_body(response.into_body()).await;
    assert!(doc["paths"]["/{id}"].is_object());
    assert!(doc["paths"]["/stats"].is_object());
}
