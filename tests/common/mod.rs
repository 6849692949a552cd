#![allow(dead_code)]

use axum::{http::StatusCode, routing::post, Json, Router};
use sea_orm::{ConnectOptions, Database};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use aperture_store::api::create_api_router;
use aperture_store::entities::{primary_setup, setup_schema};
use aperture_store::services::checkout::PaymentClient;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "aperture2025";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

/// A stand-in for the hosted-checkout provider. Counts how many session
/// requests it receives and keeps the last request body for inspection.
pub struct MockProvider {
    pub url: String,
    pub hits: Arc<AtomicUsize>,
    pub last_body: Arc<Mutex<Option<serde_json::Value>>>,
}

impl MockProvider {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.last_body.lock().expect("Mock provider lock poisoned").clone()
    }
}

pub async fn spawn_mock_provider(fail: bool) -> MockProvider {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_body: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));

    let hits_handle = hits.clone();
    let body_handle = last_body.clone();

    let app = Router::new().route(
        "/v1/checkout/sessions",
        post(move |Json(body): Json<serde_json::Value>| {
            let hits = hits_handle.clone();
            let last_body = body_handle.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *last_body.lock().expect("Mock provider lock poisoned") = Some(body);

                if fail {
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "error": "Provider exploded"
                        })),
                    )
                } else {
                    (
                        StatusCode::OK,
                        Json(json!({
                            "id": "cs_test_1",
                            "url": "https://pay.example.com/cs_test_1"
                        })),
                    )
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock provider port");
    let url = format!("http://{}", listener.local_addr().expect("No local addr"));

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Mock provider stopped");
    });

    MockProvider {
        url,
        hits,
        last_body,
    }
}

/// Boots the whole application against a fresh in-memory database on an
/// ephemeral port, pointed at the given payment provider.
pub async fn spawn_app(provider_url: &str) -> TestApp {
    std::env::set_var("SECRET", "test-only-signing-secret");
    std::env::set_var("ADMIN_USERNAME", ADMIN_USERNAME);
    std::env::set_var("ADMIN_PASSWORD", ADMIN_PASSWORD);

    //One pooled connection keeps the in-memory database alive for the
    //lifetime of the test.
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    setup_schema(&db).await;

    let shared_db = Arc::new(db);
    primary_setup(shared_db.clone()).await;

    let payments = PaymentClient::new(
        provider_url.to_owned(),
        "sk_test_secret",
        "http://localhost:3000".to_owned(),
    )
    .expect("Failed to build payment client");

    let app = create_api_router(shared_db, Arc::new(payments));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test port");
    let address = format!("http://{}", listener.local_addr().expect("No local addr"));

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server stopped");
    });

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

/// Spawns the app with a provider that is never supposed to be reached.
pub async fn spawn_app_without_provider() -> TestApp {
    spawn_app("http://127.0.0.1:9").await
}

pub async fn shopper_token(app: &TestApp) -> String {
    let response = app
        .client
        .post(app.url("/api/session"))
        .send()
        .await
        .expect("Failed to send session request");

    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse session response JSON");

    body["token"]
        .as_str()
        .expect("Token not found in session response")
        .to_owned()
}

pub async fn admin_token(app: &TestApp) -> String {
    let login_payload = json!({
        "username": ADMIN_USERNAME,
        "password": ADMIN_PASSWORD
    });

    let response = app
        .client
        .post(app.url("/api/login"))
        .json(&login_payload)
        .send()
        .await
        .expect("Failed to send login request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse login response JSON");

    body["token"]
        .as_str()
        .expect("Token not found in login response")
        .to_owned()
}

pub fn bearer(token: &str) -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::AUTHORIZATION,
        reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))
            .expect("Failed to create Authorization header"),
    );
    headers
}

pub async fn add_to_cart(app: &TestApp, token: &str, payload: serde_json::Value) -> reqwest::Response {
    app.client
        .post(app.url("/api/cart"))
        .headers(bearer(token))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send add to cart request")
}

pub async fn get_cart(app: &TestApp, token: &str) -> serde_json::Value {
    let response = app
        .client
        .get(app.url("/api/cart"))
        .headers(bearer(token))
        .send()
        .await
        .expect("Failed to send get cart request");

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse get cart response JSON")
}
