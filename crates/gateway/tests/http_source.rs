//! Integration test: HttpNumbersSource <-> local numbers service
//!
//! Serves the four resource paths from an axum router on an ephemeral port
//! and checks how each response shape maps onto the NumbersSource port.

use axum::{Json, Router, http::StatusCode, routing::get};
use rollavg_core::Category;
use rollavg_gateway::HttpNumbersSource;
use rollavg_ports::{NumbersSource, SourceError};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Start a router on 127.0.0.1:0 and return its address
async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });
    addr
}

fn numbers_app() -> Router {
    Router::new()
        .route(
            "/primes",
            get(|| async { Json(json!({ "numbers": [2, 3, 5, 7, 11] })) }),
        )
        .route(
            "/fibo",
            get(|| async { Json(json!({ "numbers": [55, 89, 144, 233] })) }),
        )
        .route(
            "/even",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
        )
        .route("/rand", get(|| async { Json(json!({ "numbers": "seven" })) }))
}

#[tokio::test]
async fn test_fetch_success() {
    let _ = env_logger::try_init();
    let addr = serve(numbers_app()).await;
    let source = HttpNumbersSource::new(format!("http://{}", addr));

    let primes = source.fetch_numbers(Category::Prime).await.unwrap();
    assert_eq!(primes, vec![2, 3, 5, 7, 11]);

    let fibo = source.fetch_numbers(Category::Fibonacci).await.unwrap();
    assert_eq!(fibo, vec![55, 89, 144, 233]);
}

#[tokio::test]
async fn test_non_success_status() {
    let _ = env_logger::try_init();
    let addr = serve(numbers_app()).await;
    let source = HttpNumbersSource::new(format!("http://{}/", addr));

    let err = source.fetch_numbers(Category::Even).await.unwrap_err();
    assert_eq!(
        err,
        SourceError::Status {
            code: 503,
            body: "try later".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body() {
    let _ = env_logger::try_init();
    let addr = serve(numbers_app()).await;
    let source = HttpNumbersSource::new(format!("http://{}", addr));

    let err = source.fetch_numbers(Category::Random).await.unwrap_err();
    assert!(
        matches!(err, SourceError::Malformed(_)),
        "Expected malformed error, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let _ = env_logger::try_init();

    // Grab a free port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpNumbersSource::new(format!("http://{}", addr));
    let err = source.fetch_numbers(Category::Prime).await.unwrap_err();
    assert!(
        matches!(err, SourceError::Network(_)),
        "Expected network error, got {:?}",
        err
    );
}

#[tokio::test]
async fn test_one_request_per_fetch() {
    let _ = env_logger::try_init();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        "/even",
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "numbers": [2, 4, 6] }))
            }
        }),
    );
    let addr = serve(app).await;
    let source = HttpNumbersSource::new(format!("http://{}", addr));

    source.fetch_numbers(Category::Even).await.unwrap();
    source.fetch_numbers(Category::Even).await.unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_requests_follow_base_path() {
    let _ = env_logger::try_init();
    let app = Router::new().route(
        "/evaluation-service/rand",
        get(|| async { Json(json!({ "numbers": [7, 1, 7] })) }),
    );
    let addr = serve(app).await;
    let source = HttpNumbersSource::new(format!("http://{}/evaluation-service/", addr));

    assert_eq!(
        source.url_for(Category::Random).as_deref(),
        Some(format!("http://{}/evaluation-service/rand", addr).as_str())
    );
    let numbers = source.fetch_numbers(Category::Random).await.unwrap();
    assert_eq!(numbers, vec![7, 1, 7]);
}
