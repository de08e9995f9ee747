//! Router-level tests: path-id gating, verbs and status codes

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use match_orchestrator::models::MatchResponse;
use match_orchestrator::router::create_router;
use match_orchestrator::state::AppState;
use serde_json::json;
use tower::ServiceExt;
use types::matches::MatchStatus;

use common::{harness, L1, T1, V1};

fn app() -> axum::Router {
    create_router(AppState::new(harness().orchestrator))
}

fn create_body(venue_id: &str) -> String {
    json!({
        "team_id": T1,
        "venue_id": venue_id,
        "score": "",
        "status": "scheduled",
        "date": "2025-05-10",
        "time": "15:00:00",
        "duration": "01:30:00",
        "result_kind": null,
        "result_minute": null
    })
    .to_string()
}

fn post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn malformed_league_id_short_circuits_with_422() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/leagues/not-a-uuid/matches")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_match_id_short_circuits_with_422() {
    let uri = format!("/api/v1/leagues/{}/matches/short", L1);
    let response = app()
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_league_is_404() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/v1/leagues/22222222-2222-2222-2222-222222222222/matches")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_returns_201_with_denormalized_body() {
    let uri = format!("/api/v1/leagues/{}/matches", L1);
    let response = app().oneshot(post(&uri, create_body(V1))).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: MatchResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.status, MatchStatus::Scheduled);
    assert_eq!(body.venue_name, "Old Trafford");
    assert_eq!(body.team_name, "MUFC");
    assert_eq!(body.league_name, "Premier League");
    assert_eq!(body.match_id.as_str().len(), 36);
}

#[tokio::test]
async fn full_lifecycle_over_http() {
    let app = app();
    let base = format!("/api/v1/leagues/{}/matches", L1);

    // Create
    let response = app
        .clone()
        .oneshot(post(&base, create_body(V1)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let created: MatchResponse = serde_json::from_slice(&bytes).unwrap();

    // Read back
    let uri = format!("{}/{}", base, created.match_id);
    let response = app
        .clone()
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Delete
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(&uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app
        .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_against_live_venue_is_422_with_machine_readable_kind() {
    let uri = format!("/api/v1/leagues/{}/matches", L1);
    let response = app()
        .oneshot(post(&uri, create_body(common::V_LIVE)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "INVALID_INPUT");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains(common::V_LIVE));
}

#[tokio::test]
async fn out_of_range_duration_is_422_with_explicit_message() {
    let uri = format!("/api/v1/leagues/{}/matches", L1);
    let body = json!({
        "team_id": T1,
        "venue_id": V1,
        "score": "",
        "status": "scheduled",
        "date": "2025-05-10",
        "time": "15:00:00",
        "duration": "03:30:00",
        "result_kind": null,
        "result_minute": null
    })
    .to_string();

    let response = app().oneshot(post(&uri, body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed["error"], "INVALID_DURATION");
    assert!(parsed["message"].as_str().unwrap().contains("03:30"));
}

#[tokio::test]
async fn unknown_status_token_never_reaches_the_pipeline() {
    let uri = format!("/api/v1/leagues/{}/matches", L1);
    let body = json!({
        "team_id": T1,
        "venue_id": V1,
        "score": "",
        "status": "postponed",
        "date": "2025-05-10",
        "time": "15:00:00",
        "duration": "01:30:00"
    })
    .to_string();

    let response = app().oneshot(post(&uri, body)).await.unwrap();
    // Rejected at deserialization; a token outside the enumeration is
    // unrepresentable further in
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
