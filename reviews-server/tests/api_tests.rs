//! Integration tests for the review endpoints on `/`
//!
//! Each test builds its own store from the fixture CSV, so appends in one
//! test never leak into another.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot` method

use reviews_server::{
    build_router,
    store::{load_seed, ReviewStore},
    AppState,
};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/reviews.csv");

/// Test helper: store seeded from the fixture file
fn seeded_store() -> ReviewStore {
    let reviews = load_seed(FIXTURE).expect("Fixture should load");
    ReviewStore::with_reviews(reviews)
}

fn setup_app(store: ReviewStore) -> Router {
    build_router(AppState::new(store))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: send a request, return status and raw body
async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let json = serde_json::from_slice(&bytes).expect("Should parse JSON");
    (status, json)
}

fn compounds(body: &Value) -> Vec<f64> {
    body.as_array()
        .expect("Should be an array")
        .iter()
        .map(|r| r["sentiment"]["compound"].as_f64().unwrap())
        .collect()
}

// =============================================================================
// GET /
// =============================================================================

#[tokio::test]
async fn test_get_returns_all_reviews_annotated() {
    let app = setup_app(seeded_store());

    let (status, body) = send_json(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);

    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 5);
    for review in reviews {
        assert!(review["Location"].is_string());
        assert!(review["Timestamp"].is_string());
        assert!(review["ReviewBody"].is_string());
        let sentiment = &review["sentiment"];
        for key in ["neg", "neu", "pos", "compound"] {
            assert!(sentiment[key].is_number(), "missing {key}");
        }
        let compound = sentiment["compound"].as_f64().unwrap();
        assert!((-1.0..=1.0).contains(&compound));
    }
}

#[tokio::test]
async fn test_get_sorted_by_compound_descending() {
    let app = setup_app(seeded_store());

    let (_, body) = send_json(&app, get("/")).await;
    let scores = compounds(&body);
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1], "{:?} not descending", scores);
    }
    // Strongest positive and negative seed reviews land at the ends
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews[0]["ReviewId"], "seed-4");
    assert_eq!(reviews[4]["Location"], "Old Town, Nowhere");
}

#[tokio::test]
async fn test_get_response_headers() {
    let app = setup_app(seeded_store());

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let declared: usize = response.headers()[header::CONTENT_LENGTH]
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(declared, bytes.len());
    // Two-space indentation
    assert!(bytes.starts_with(b"[\n  {\n    \""));
}

#[tokio::test]
async fn test_seed_review_without_id_omits_field() {
    let app = setup_app(seeded_store());

    let (_, body) = send_json(&app, get("/?location=Old+Town%2C+Nowhere")).await;
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert!(reviews[0].get("ReviewId").is_none());
}

#[tokio::test]
async fn test_get_filters_by_location() {
    let app = setup_app(seeded_store());

    let (status, body) = send_json(&app, get("/?location=Denver%2C%20Colorado")).await;
    assert_eq!(status, StatusCode::OK);
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert!(reviews.iter().all(|r| r["Location"] == "Denver, Colorado"));
}

#[tokio::test]
async fn test_get_unmatched_location_is_empty_array() {
    let app = setup_app(seeded_store());

    let (status, bytes) = send(&app, get("/?location=Atlantis")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"[]");
}

#[tokio::test]
async fn test_get_location_filter_is_lowercase_only() {
    let app = setup_app(seeded_store());

    // The capitalized name is the write-side field; on reads it is ignored
    let (_, body) = send_json(&app, get("/?Location=Atlantis")).await;
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_filters_by_closed_date_range() {
    let app = setup_app(seeded_store());

    let uri = "/?start_date=2021-01-14+09%3A12%3A44&end_date=2021-11-27+12%3A03%3A31";
    let (_, body) = send_json(&app, get(uri)).await;
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 3);
    for review in reviews {
        let ts = review["Timestamp"].as_str().unwrap();
        assert!(ts >= "2021-01-14 09:12:44" && ts <= "2021-11-27 12:03:31");
    }
}

#[tokio::test]
async fn test_get_combined_filters() {
    let app = setup_app(seeded_store());

    let uri = "/?location=Denver%2C+Colorado&start_date=2021-06-01";
    let (_, body) = send_json(&app, get(uri)).await;
    let reviews = body.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["ReviewId"], "seed-3");
}

#[tokio::test]
async fn test_get_malformed_query_is_not_an_error() {
    let app = setup_app(seeded_store());

    let (status, body) = send_json(&app, get("/?start_date=&&=&junk")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_undecodable_location_matches_nothing() {
    let app = setup_app(seeded_store());

    let (status, bytes) = send(&app, get("/?location=%FF")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"[]");
}

#[tokio::test]
async fn test_repeated_get_is_byte_identical() {
    let app = setup_app(seeded_store());

    let (_, first) = send(&app, get("/?start_date=2021")).await;
    let (_, second) = send(&app, get("/?start_date=2021")).await;
    assert_eq!(first, second);
}

// =============================================================================
// POST /
// =============================================================================

#[tokio::test]
async fn test_post_creates_review() {
    let app = setup_app(seeded_store());

    let (status, body) = send_json(
        &app,
        post_form("Location=Tucson%2C+Arizona&ReviewBody=Great+burritos"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = body["ReviewId"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_eq!(body["Location"], "Tucson, Arizona");
    assert_eq!(body["ReviewBody"], "Great burritos");
    assert!(body.get("sentiment").is_none());

    let ts = body["Timestamp"].as_str().unwrap();
    assert!(chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").is_ok());

    // Subsequent listing includes the new review, annotated
    let (_, listing) = send_json(&app, get("/?location=Tucson%2C+Arizona")).await;
    let reviews = listing.as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["ReviewId"], id);
    assert!(reviews[0]["sentiment"]["compound"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn test_post_ids_are_unique() {
    let app = setup_app(ReviewStore::new());
    let form = "Location=Fresno%2C+California&ReviewBody=Fine";

    let (_, a) = send_json(&app, post_form(form)).await;
    let (_, b) = send_json(&app, post_form(form)).await;
    assert_ne!(a["ReviewId"], b["ReviewId"]);

    let (_, listing) = send_json(&app, get("/")).await;
    assert_eq!(listing.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_post_missing_location() {
    let store = seeded_store();
    let app = setup_app(store.clone());

    let (status, body) = send_json(&app, post_form("ReviewBody=Hello")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        serde_json::json!({ "error": "Missing Location or ReviewBody" })
    );
    assert_eq!(store.len(), 5);
}

#[tokio::test]
async fn test_post_invalid_location() {
    let store = seeded_store();
    let app = setup_app(store.clone());

    let (status, body) = send_json(
        &app,
        post_form("Location=Nowhere%2C+Nowhere&ReviewBody=Hello"),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "Invalid Location" }));
    assert_eq!(store.len(), 5);
}

#[tokio::test]
async fn test_post_error_body_bytes() {
    let app = setup_app(ReviewStore::new());

    let (status, bytes) = send(&app, post_form("ReviewBody=Hello")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(bytes, b"{\"error\": \"Missing Location or ReviewBody\"}");
}

#[tokio::test]
async fn test_post_invalid_utf8_escape_is_replaced() {
    let store = ReviewStore::new();
    let app = setup_app(store.clone());

    let (status, body) = send_json(
        &app,
        post_form("Location=Denver%2C+Colorado&ReviewBody=caf%E9+ok&x=%FF"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["ReviewBody"], "caf\u{fffd} ok");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_non_ascii_is_escaped_in_responses() {
    let app = setup_app(ReviewStore::new());

    let (status, bytes) = send(
        &app,
        post_form("Location=Denver%2C+Colorado&ReviewBody=Cr%C3%A8me+br%C3%BBl%C3%A9e"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(bytes.is_ascii());
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains(r#""ReviewBody": "Cr\u00e8me br\u00fbl\u00e9e""#));

    let (_, listing) = send(&app, get("/")).await;
    assert!(listing.is_ascii());
}

#[tokio::test]
async fn test_post_ignores_content_type() {
    let app = setup_app(ReviewStore::new());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("Location=Denver%2C+Colorado&ReviewBody=ok"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_post_non_utf8_body_is_bad_request() {
    let app = setup_app(ReviewStore::new());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(vec![0xffu8, 0xfe, 0xfd]))
        .unwrap();
    let (status, body) = send_json(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

// =============================================================================
// Other methods and paths
// =============================================================================

#[tokio::test]
async fn test_unsupported_method_is_405() {
    let app = setup_app(seeded_store());

    for method in ["PUT", "DELETE", "PATCH"] {
        let request = Request::builder()
            .method(method)
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
    }
}

#[tokio::test]
async fn test_any_path_dispatches_by_method() {
    let app = setup_app(seeded_store());

    let (_, root) = send(&app, get("/?location=Denver%2C+Colorado")).await;
    let (status, other) = send(&app, get("/reviews?location=Denver%2C+Colorado")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(other, root);

    let request = Request::builder()
        .method("POST")
        .uri("/some/where")
        .body(Body::from("Location=Denver%2C+Colorado&ReviewBody=ok"))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);

    let request = Request::builder()
        .method("DELETE")
        .uri("/reviews")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
