use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::sync::mpsc;
use tower::ServiceExt;

use hanbai_api::{
    auth::{AuthConfig, AuthService},
    config::AppConfig,
    db,
    events::{self, EventSender},
    services::AppServices,
    AppState,
};

pub const TEST_EMAIL: &str = "tester@example.com";
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Test harness running the real router over a private in-memory SQLite
/// database. One connection keeps the database alive for the lifetime of
/// the harness.
pub struct TestApp {
    router: Router,
    #[allow(dead_code)]
    pub state: AppState,
    token: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let cfg = AppConfig::new(
            "sqlite::memory:".to_string(),
            "test-secret-key-for-integration-tests-only".to_string(),
            3600,
            "127.0.0.1".to_string(),
            0,
            "test".to_string(),
        );

        let mut db_cfg: db::DbConfig = (&cfg).into();
        db_cfg.max_connections = 1;
        db_cfg.min_connections = 1;
        let pool = db::establish_connection_with_config(&db_cfg)
            .await
            .expect("test database should connect");
        db::run_migrations(&pool)
            .await
            .expect("migrations should apply");
        let db_arc = Arc::new(pool);

        let (event_tx, event_rx) = mpsc::channel(64);
        let event_sender = EventSender::new(event_tx);
        tokio::spawn(events::process_events(event_rx));

        let auth_cfg = AuthConfig::new(
            cfg.jwt_secret.clone(),
            cfg.auth_issuer.clone(),
            cfg.auth_audience.clone(),
            Duration::from_secs(cfg.jwt_expiration),
        );
        let auth = Arc::new(AuthService::new(auth_cfg, db_arc.clone()));
        auth.create_user(TEST_EMAIL, TEST_PASSWORD, "テスト担当")
            .await
            .expect("test user should be created");
        let login = auth
            .login(TEST_EMAIL, TEST_PASSWORD)
            .await
            .expect("test user should sign in");

        let services = AppServices::new(db_arc.clone(), event_sender);
        let state = AppState {
            db: db_arc,
            config: cfg,
            services,
            auth: auth.clone(),
        };

        let protected = hanbai_api::api_v1_routes().layer(axum::middleware::from_fn_with_state(
            auth,
            hanbai_api::auth::require_auth,
        ));
        let router = Router::new()
            .nest("/health", hanbai_api::handlers::health::routes())
            .nest("/auth", hanbai_api::handlers::auth::public_routes())
            .nest("/api/v1", protected)
            .with_state(state.clone());

        Self {
            router,
            state,
            token: login.access_token,
        }
    }

    /// Issue a request with the harness user's bearer token.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.request_with_token(method, uri, body, Some(&self.token))
            .await
    }

    /// Issue a request without any Authorization header.
    pub async fn request_unauthenticated(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        self.request_with_token(method, uri, body, None).await
    }

    pub async fn request_with_token(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router should respond");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }
}
