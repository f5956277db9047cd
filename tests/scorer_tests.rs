//! `ScoringClient` against a local mock of the scoring service.

use std::net::SocketAddr;
use std::sync::mpsc;
use std::time::Duration;

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use cringe_detector::error::ScoreError;
use cringe_detector::net::scorer::{Scorer, ScoringClient};

/// Serve `app` on a random port from a background runtime; returns the base URL.
fn spawn_mock(app: Router) -> String {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
                .await
                .unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}", rx.recv().unwrap())
}

fn client(base: &str) -> ScoringClient {
    ScoringClient::new(&format!("{}/predict", base), Duration::from_secs(5)).unwrap()
}

/// Echoes a score derived from the request body.
fn echo_service() -> Router {
    Router::new().route(
        "/predict",
        post(|Json(body): Json<Value>| async move {
            let score = match body["text"].as_str() {
                Some("hello") => 0.25,
                Some("overflow") => 1.5,
                Some(_) => 0.9,
                None => -1.0,
            };
            Json(json!({ "score": score }))
        }),
    )
}

#[test]
fn test_posts_text_and_scales_score() {
    let base = spawn_mock(echo_service());
    let score = client(&base).score("hello").unwrap();
    assert!((score.value() - 25.0).abs() < 1e-4);
}

#[test]
fn test_out_of_range_score_is_clamped() {
    let base = spawn_mock(echo_service());
    let score = client(&base).score("overflow").unwrap();
    assert_eq!(score.value(), 100.0);
}

#[test]
fn test_non_2xx_is_a_status_error() {
    let base = spawn_mock(Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
    ));
    let err = client(&base).score("hello").unwrap_err();
    assert!(matches!(err, ScoreError::Status(500)), "got {:?}", err);
}

#[test]
fn test_malformed_body_is_a_decode_error() {
    let base = spawn_mock(Router::new().route(
        "/predict",
        post(|| async { Json(json!({ "verdict": "cringe" })) }),
    ));
    let err = client(&base).score("hello").unwrap_err();
    assert!(matches!(err, ScoreError::Decode(_)), "got {:?}", err);
}

#[test]
fn test_unreachable_service_is_a_transport_error() {
    // Grab a free port and release it so nothing is listening there.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = client(&format!("http://127.0.0.1:{}", port))
        .score("hello")
        .unwrap_err();
    assert!(matches!(err, ScoreError::Transport(_)), "got {:?}", err);
}
