use axum::{
    extract::{Path, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use remocon::domain::remote::{ApiError, RemoteApi};
use remocon::infrastructure::http::HttpRemote;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct Backend {
    sent: Arc<Mutex<Vec<String>>>,
}

// Written out by hand so the group keys reach the client in this exact,
// non-alphabetical order.
const COMMANDS_BODY: &str = r#"{
    "commands": ["powerOn", "powerOff", "volumeUp", "menuUp"],
    "groups": {
        "power": ["powerOn", "powerOff"],
        "volume": ["volumeUp"],
        "menu": ["menuUp"]
    }
}"#;

async fn commands() -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], COMMANDS_BODY)
}

async fn status() -> Json<Value> {
    Json(json!({ "last_power_command": true, "input": "hdmi1" }))
}

async fn command(State(state): State<Backend>, Path(name): Path<String>) -> StatusCode {
    if name == "bogus" {
        return StatusCode::NOT_FOUND;
    }
    state.sent.lock().unwrap().push(name);
    StatusCode::OK
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn start() -> (HttpRemote, Backend) {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/commands", get(commands))
        .route("/api/status", get(status))
        .route("/api/command/:name", post(command))
        .with_state(backend.clone());
    let addr = serve(router).await;
    let remote = HttpRemote::new(&format!("http://{addr}/"), Duration::from_secs(2)).unwrap();
    (remote, backend)
}

#[tokio::test]
async fn test_fetch_commands_keeps_group_order() {
    let (remote, _) = start().await;
    let catalog = remote.fetch_commands().await.unwrap();

    assert_eq!(catalog.commands.len(), 4);
    let names: Vec<&str> = catalog.groups.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["power", "volume", "menu"]);
    assert!(catalog.mismatches().is_empty());
}

#[tokio::test]
async fn test_fetch_status_ignores_extra_fields() {
    let (remote, _) = start().await;
    let status = remote.fetch_status().await.unwrap();
    assert_eq!(status.last_power_command, Some(true));
}

#[tokio::test]
async fn test_send_posts_once_per_call() {
    let (remote, backend) = start().await;
    remote.send_command("menuUp").await.unwrap();
    remote.send_command("menuUp").await.unwrap();
    remote.send_command("volumeUp").await.unwrap();

    let sent = backend.sent.lock().unwrap().clone();
    assert_eq!(sent, vec!["menuUp", "menuUp", "volumeUp"]);
}

#[tokio::test]
async fn test_non_success_status_is_http_error() {
    let (remote, backend) = start().await;
    let err = remote.send_command("bogus").await.unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 404, .. }));
    assert!(!err.is_transport());
    assert!(backend.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_body_is_decode_error() {
    let router = Router::new().route("/api/commands", get(|| async { "not json" }));
    let addr = serve(router).await;
    let remote = HttpRemote::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();

    let err = remote.fetch_commands().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    // Grab a free port, then close it again.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let remote = HttpRemote::new(&format!("http://{addr}"), Duration::from_secs(2)).unwrap();

    let err = remote.fetch_status().await.unwrap_err();
    assert!(err.is_transport());
}
