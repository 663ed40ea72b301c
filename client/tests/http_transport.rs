//! End-to-end tests of the reqwest transport against a local axum service
//! that speaks the `/verify` and `/healthz` contract.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use mever_client::{
    ClientConfig, HttpTransport, TransportError, VerifyClient, VerifyError, VerifyTransport,
    FALLBACK_MESSAGE, NETWORK_MESSAGE,
};
use mever_types::{FileSelection, DEFAULT_MAX_UPLOAD_BYTES};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[derive(Clone, Debug)]
struct ReceivedPart {
    name: String,
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

type Received = Arc<Mutex<Vec<ReceivedPart>>>;

/// Verdict keyed on the uploaded bytes so each test can pick its path.
async fn verify_handler(State(received): State<Received>, mut multipart: Multipart) -> Response {
    let mut image = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        let part = ReceivedPart {
            name: field.name().unwrap_or_default().to_string(),
            file_name: field.file_name().map(str::to_owned),
            content_type: field.content_type().map(str::to_owned),
            bytes: field.bytes().await.map(|b| b.to_vec()).unwrap_or_default(),
        };
        received.lock().unwrap().push(part.clone());
        if part.name == "image" {
            image = Some(part);
        }
    }

    let Some(image) = image else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "missing 'image'"}))).into_response();
    };
    match image.bytes.as_slice() {
        b"crash" => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        b"noface" => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "no face detected"})),
        )
            .into_response(),
        b"garbage" => (StatusCode::OK, "not json").into_response(),
        bytes => {
            let is_me = bytes.starts_with(b"me");
            let score = if is_me { 0.97 } else { 0.12 };
            Json(json!({
                "is_me": is_me,
                "score": score,
                "threshold": 0.80,
                "timing_ms": 42.5,
            }))
            .into_response()
        }
    }
}

async fn healthz() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "model": "me-verifier-v1", "threshold": 0.80}))
}

async fn spawn_service() -> (SocketAddr, Received) {
    let received: Received = Arc::default();
    let app = Router::new()
        .route("/verify", post(verify_handler))
        .route("/healthz", get(healthz))
        .with_state(received.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (addr, received)
}

fn transport_for(addr: SocketAddr) -> HttpTransport {
    let config = ClientConfig {
        base_url: format!("http://{addr}/"),
        timeout_secs: 5,
        connect_timeout_secs: 2,
        ..Default::default()
    };
    HttpTransport::new(&config).expect("transport")
}

fn png(bytes: &[u8]) -> FileSelection {
    FileSelection::new("face.png", "image/png", bytes.to_vec())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn sends_image_part_with_name_and_type() {
    let (addr, received) = spawn_service().await;
    let transport = transport_for(addr);
    let upload = png(b"me-selfie").accept(DEFAULT_MAX_UPLOAD_BYTES).unwrap();

    let raw = transport.verify(&upload).await.unwrap();
    assert_eq!(raw.status, 200);

    let parts = received.lock().unwrap().clone();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, "image");
    assert_eq!(parts[0].file_name.as_deref(), Some("face.png"));
    assert_eq!(parts[0].content_type.as_deref(), Some("image/png"));
    assert_eq!(parts[0].bytes, b"me-selfie");
}

#[tokio::test]
async fn client_returns_verdict() {
    let (addr, _) = spawn_service().await;
    let client = VerifyClient::new(transport_for(addr), DEFAULT_MAX_UPLOAD_BYTES);

    let result = client.verify(png(b"me-selfie")).await.unwrap();
    assert!(result.is_me);
    assert!((result.score - 0.97).abs() < f64::EPSILON);
    assert!((result.timing_ms - 42.5).abs() < f64::EPSILON);

    let result = client.verify(png(b"someone-else")).await.unwrap();
    assert!(!result.is_me);
}

#[tokio::test]
async fn client_surfaces_service_rejection() {
    let (addr, _) = spawn_service().await;
    let client = VerifyClient::new(transport_for(addr), DEFAULT_MAX_UPLOAD_BYTES);

    let err = client.verify(png(b"noface")).await.unwrap_err();
    assert_eq!(
        err,
        VerifyError::Server {
            status: 422,
            message: Some("no face detected".into())
        }
    );
}

#[tokio::test]
async fn client_falls_back_on_unreadable_error_body() {
    let (addr, _) = spawn_service().await;
    let client = VerifyClient::new(transport_for(addr), DEFAULT_MAX_UPLOAD_BYTES);

    let err = client.verify(png(b"crash")).await.unwrap_err();
    assert!(matches!(err, VerifyError::Server { status: 500, message: None }));
    assert_eq!(err.user_message(), FALLBACK_MESSAGE);
}

#[tokio::test]
async fn client_flags_garbage_success_body() {
    let (addr, _) = spawn_service().await;
    let client = VerifyClient::new(transport_for(addr), DEFAULT_MAX_UPLOAD_BYTES);

    let err = client.verify(png(b"garbage")).await.unwrap_err();
    assert!(matches!(err, VerifyError::InvalidResponse(_)));
    assert_eq!(err.user_message(), NETWORK_MESSAGE);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_service() {
    let (addr, received) = spawn_service().await;
    let client = VerifyClient::new(transport_for(addr), 4);

    let gif = FileSelection::new("face.gif", "image/gif", b"GIF89a".to_vec());
    assert!(matches!(
        client.verify(gif).await,
        Err(VerifyError::InvalidInput(_))
    ));
    assert!(matches!(
        client.verify(png(b"too big")).await,
        Err(VerifyError::InvalidInput(_))
    ));
    assert!(received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn health_check_parses_status() {
    let (addr, _) = spawn_service().await;
    let health = transport_for(addr).health().await.unwrap();
    assert!(health.is_ok());
    assert_eq!(health.model, "me-verifier-v1");
    assert!((health.threshold - 0.80).abs() < f64::EPSILON);
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = transport_for(addr);
    let upload = png(b"me").accept(DEFAULT_MAX_UPLOAD_BYTES).unwrap();
    let err = transport.verify(&upload).await.unwrap_err();
    assert!(matches!(
        err,
        TransportError::Connect(_) | TransportError::Request(_)
    ));

    let err = VerifyError::from(err);
    assert_eq!(err.user_message(), NETWORK_MESSAGE);
}
