use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Send a GET request via `oneshot` and return (status, parsed JSON body).
///
/// The router is cloned per request so one router (and therefore one shared
/// history store) can serve a whole scenario.
async fn get(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

/// Send a POST request with a JSON body via `oneshot` and return (status, parsed JSON body).
async fn post_json(
    app: &axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn temperatures(json: &serde_json::Value) -> Vec<f64> {
    json.as_array()
        .expect("expected JSON array")
        .iter()
        .map(|r| r["temperature"].as_f64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn append_returns_201_with_stored_record() {
    let app = thermoloop_datastore::build_router();

    let (status, json) = post_json(&app, "/data", serde_json::json!({ "temperature": 21.4 })).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["message"], "reading stored");
    assert_eq!(json["temperature"], 21.4);
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn list_returns_newest_first_with_limit() {
    let app = thermoloop_datastore::build_router();

    for t in [21.4, 22.0, 20.5] {
        let (status, _) = post_json(&app, "/data", serde_json::json!({ "temperature": t })).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, json) = get(&app, "/data?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(temperatures(&json), vec![20.5, 22.0]);
}

#[tokio::test]
async fn list_without_limit_uses_default_window() {
    let app = thermoloop_datastore::build_router();

    for t in [21.4, 22.0, 20.5] {
        post_json(&app, "/data", serde_json::json!({ "temperature": t })).await;
    }

    // Three readings fit inside the default window of 10.
    let (status, json) = get(&app, "/data").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(temperatures(&json), vec![20.5, 22.0, 21.4]);
}

#[tokio::test]
async fn default_window_caps_long_histories() {
    let app = thermoloop_datastore::build_router();

    for i in 0..15 {
        post_json(&app, "/data", serde_json::json!({ "temperature": f64::from(i) })).await;
    }

    let (_, json) = get(&app, "/data").await;
    let temps = temperatures(&json);
    assert_eq!(temps.len(), 10);
    assert_eq!(temps[0], 14.0);
    assert_eq!(temps[9], 5.0);
}

#[tokio::test]
async fn malformed_limit_falls_back_to_default() {
    let app = thermoloop_datastore::build_router();

    for i in 0..12 {
        post_json(&app, "/data", serde_json::json!({ "temperature": f64::from(i) })).await;
    }

    for uri in ["/data?limit=banana", "/data?limit=-3", "/data?limit=1.5"] {
        let (status, json) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri} should not error");
        assert_eq!(temperatures(&json).len(), 10, "{uri} should use the default");
    }
}

#[tokio::test]
async fn limit_zero_returns_empty_list() {
    let app = thermoloop_datastore::build_router();
    post_json(&app, "/data", serde_json::json!({ "temperature": 20.0 })).await;

    let (status, json) = get(&app, "/data?limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn missing_temperature_is_rejected_and_store_untouched() {
    let app = thermoloop_datastore::build_router();

    let (status, json) = post_json(&app, "/data", serde_json::json!({ "humidity": 40 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("temperature"));

    let (_, json) = get(&app, "/data").await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn non_numeric_temperature_is_rejected() {
    let app = thermoloop_datastore::build_router();

    let (status, _) = post_json(&app, "/data", serde_json::json!({ "temperature": "warm" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(&app, "/data", serde_json::json!({ "temperature": null })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) = get(&app, "/data").await;
    assert!(json.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn numeric_string_temperature_is_accepted() {
    let app = thermoloop_datastore::build_router();

    let (status, json) = post_json(&app, "/data", serde_json::json!({ "temperature": "19.5" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["temperature"], 19.5);
}

#[tokio::test]
async fn timestamps_are_assigned_in_arrival_order() {
    let app = thermoloop_datastore::build_router();

    post_json(&app, "/data", serde_json::json!({ "temperature": 1.0 })).await;
    post_json(&app, "/data", serde_json::json!({ "temperature": 2.0 })).await;

    let (_, json) = get(&app, "/data").await;
    let arr = json.as_array().unwrap();
    let newest: chrono::DateTime<chrono::Utc> =
        arr[0]["timestamp"].as_str().unwrap().parse().unwrap();
    let oldest: chrono::DateTime<chrono::Utc> =
        arr[1]["timestamp"].as_str().unwrap().parse().unwrap();
    assert!(newest >= oldest);
}
