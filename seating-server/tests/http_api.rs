//! HTTP routes driven in-process through the router

mod common;

use axum::Router;
use axum::body::Body;
use common::TestEnv;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> (Router, TestEnv) {
    let env = TestEnv::new().await;
    let app = seating_server::routes::build_app(env.state());
    (app, env)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let (app, _env) = app().await;
    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = call(&app, Method::GET, "/health/detailed", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"]["status"], "ok");
}

#[tokio::test]
async fn test_table_routes() {
    let (app, _env) = app().await;

    let (status, body) = call(&app, Method::POST, "/table/1", Some(json!({ "seats": 6 }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], 1);
    assert_eq!(body["seats"], 6);

    let (status, body) = call(&app, Method::POST, "/table/1", Some(json!({ "seats": 2 }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7002);

    let (status, _) = call(&app, Method::POST, "/table/2", Some(json!({ "seats": -1 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = call(&app, Method::GET, "/table/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seats"], 6);

    let (status, body) = call(&app, Method::GET, "/tables", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = call(&app, Method::DELETE, "/table/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "deleted" }));

    let (status, body) = call(&app, Method::GET, "/table/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);
}

#[tokio::test]
async fn test_guest_list_flow() {
    let (app, _env) = app().await;
    call(&app, Method::POST, "/table/1", Some(json!({ "seats": 6 }))).await;

    let (status, body) = call(
        &app,
        Method::POST,
        "/guest_list/bob",
        Some(json!({ "table": 1, "accompanying_guests": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "name": "bob" }));

    let (status, body) = call(
        &app,
        Method::POST,
        "/guest_list/carol",
        Some(json!({ "table": 1, "accompanying_guests": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 7103);
    assert_eq!(body["details"]["remaining"], 0);

    let (status, body) = call(
        &app,
        Method::POST,
        "/guest_list/bob",
        Some(json!({ "table": 1, "accompanying_guests": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7102);

    let (status, body) = call(
        &app,
        Method::POST,
        "/guest_list/dave",
        Some(json!({ "table": 9, "accompanying_guests": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7001);

    let (status, body) = call(&app, Method::GET, "/guest_list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "guests": [{ "name": "bob", "table": 1, "accompanying_guests": 5 }] })
    );

    let (status, body) = call(&app, Method::DELETE, "/table/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7003);

    let (status, body) = call(&app, Method::DELETE, "/guest_list/bob", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "deleted" }));

    let (status, body) = call(&app, Method::DELETE, "/guest_list/bob", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7101);
}

#[tokio::test]
async fn test_arrivals_and_empty_seats() {
    let (app, _env) = app().await;
    call(&app, Method::POST, "/table/1", Some(json!({ "seats": 10 }))).await;
    call(&app, Method::POST, "/table/2", Some(json!({ "seats": 10 }))).await;
    for (name, table, accompanying) in [("bob", 1, 5), ("taylor", 1, 2), ("scott", 2, 9)] {
        let (status, _) = call(
            &app,
            Method::POST,
            &format!("/guest_list/{name}"),
            Some(json!({ "table": table, "accompanying_guests": accompanying })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = call(&app, Method::GET, "/seats_empty", None).await;
    assert_eq!(body, json!({ "seats_empty": 20 }));

    for (name, accompanying) in [("bob", 5), ("taylor", 2)] {
        let (status, body) = call(
            &app,
            Method::PUT,
            &format!("/guest/{name}"),
            Some(json!({ "accompanying_guests": accompanying })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], name);
    }

    let (_, body) = call(&app, Method::GET, "/seats_empty", None).await;
    assert_eq!(body, json!({ "seats_empty": 11 }));

    let (status, body) = call(&app, Method::GET, "/guests", None).await;
    assert_eq!(status, StatusCode::OK);
    let guests = body["guests"].as_array().unwrap();
    assert_eq!(guests.len(), 2);
    assert_eq!(guests[0]["name"], "bob");
    assert_eq!(guests[0]["accompanying_guests"], 5);
    // dd/mm/yy HH:MM
    let time_arrived = guests[0]["time_arrived"].as_str().unwrap();
    assert_eq!(time_arrived.len(), 14);
    assert_eq!(&time_arrived[2..3], "/");
    assert_eq!(&time_arrived[5..6], "/");
    assert_eq!(&time_arrived[11..12], ":");

    let (status, body) = call(
        &app,
        Method::PUT,
        "/guest/scott",
        Some(json!({ "accompanying_guests": 10 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 7103);

    let (status, body) = call(&app, Method::DELETE, "/guest/bob", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "deleted" }));

    let (_, body) = call(&app, Method::GET, "/seats_empty", None).await;
    assert_eq!(body, json!({ "seats_empty": 17 }));
}

#[tokio::test]
async fn test_arrival_validation_and_unknown_guest() {
    let (app, _env) = app().await;

    let (status, body) = call(
        &app,
        Method::PUT,
        "/guest/nobody",
        Some(json!({ "accompanying_guests": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 7101);

    let (status, body) = call(
        &app,
        Method::PUT,
        "/guest/nobody",
        Some(json!({ "accompanying_guests": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (app, _env) = app().await;
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_malformed_requests_are_invalid() {
    let (app, _env) = app().await;

    let (status, body) = call(&app, Method::GET, "/table/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    // 缺少 seats 字段
    let (status, body) = call(&app, Method::POST, "/table/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/table/1")
        .header("content-type", "application/json")
        .body(Body::from("{\"seats\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["code"], 5);

    // nothing was created by the rejected requests
    let (_, body) = call(&app, Method::GET, "/tables", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let (app, _env) = app().await;
    let (status, body) = call(&app, Method::GET, "/no/such/route", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
    assert_eq!(body["details"]["resource"], "Route /no/such/route");
}
