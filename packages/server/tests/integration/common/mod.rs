use std::net::SocketAddr;

use reqwest::Client;
use serde_json::{Value, json};

use server::config::{AppConfig, AuthConfig, CorsConfig, ServerConfig, StoreConfig};
use server::consumers::consume_store_changes;
use server::state::AppState;
use store::Notifier;

pub mod routes {
    pub const LOGIN: &str = "/api/v1/auth/login";
    pub const JUDGE_LOGIN: &str = "/api/v1/auth/judge-login";
    pub const SIGNUP: &str = "/api/v1/auth/signup";
    pub const ME: &str = "/api/v1/auth/me";
    pub const EVENTS: &str = "/api/v1/events";
    pub const SCORES: &str = "/api/v1/scores";
    pub const COORDINATOR_DASHBOARD: &str = "/api/v1/dashboard/coordinator";
    pub const JUDGE_DASHBOARD: &str = "/api/v1/dashboard/judge";

    pub fn event(id: &str) -> String {
        format!("/api/v1/events/{id}")
    }

    pub fn event_candidates(id: &str) -> String {
        format!("/api/v1/events/{id}/candidates")
    }

    pub fn event_judges(id: &str) -> String {
        format!("/api/v1/events/{id}/judges")
    }

    pub fn event_criteria(id: &str) -> String {
        format!("/api/v1/events/{id}/criteria")
    }

    pub fn event_awards(id: &str) -> String {
        format!("/api/v1/events/{id}/awards")
    }

    pub fn event_votes(id: &str) -> String {
        format!("/api/v1/events/{id}/votes")
    }

    pub fn candidate(id: &str) -> String {
        format!("/api/v1/candidates/{id}")
    }

    pub fn candidate_scores(id: &str) -> String {
        format!("/api/v1/candidates/{id}/scores")
    }

    pub fn judge(id: &str) -> String {
        format!("/api/v1/judges/{id}")
    }

    pub fn criteria(id: &str) -> String {
        format!("/api/v1/criteria/{id}")
    }

    pub fn award(id: &str) -> String {
        format!("/api/v1/awards/{id}")
    }

    pub fn award_tally(id: &str) -> String {
        format!("/api/v1/awards/{id}/tally")
    }

    pub fn score(id: &str) -> String {
        format!("/api/v1/scores/{id}")
    }
}

/// A running test server over the demo data.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            auth: AuthConfig {
                jwt_secret: "test-secret-for-integration-tests".to_string(),
                token_ttl_hours: 1,
            },
            store: StoreConfig {
                seed_mock_data: true,
            },
        };

        let notifier = Notifier::default();
        tokio::spawn(consume_store_changes(notifier.subscribe()));
        let app = server::build_router(AppState::new(app_config, notifier));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await
            .unwrap();
        });

        Self {
            addr,
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn post_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn post_without_token(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    /// POST as an anonymous visitor behind a proxy reporting `ip`.
    pub async fn post_from(&self, path: &str, body: &Value, ip: &str) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .header("X-Forwarded-For", ip)
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn get_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn get_without_token(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn put_with_token(&self, path: &str, body: &Value, token: &str) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn delete_with_token(&self, path: &str, token: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Log in as a seeded coordinator and return the auth token.
    pub async fn login_coordinator(&self, email: &str) -> String {
        let res = self
            .post_without_token(
                routes::LOGIN,
                &json!({"email": email, "password": "any-password"}),
            )
            .await;
        assert_eq!(res.status, 200, "Login failed: {}", res.text);
        res.token()
    }

    /// Log in as a judge by access code and return the auth token.
    pub async fn login_judge(&self, access_code: &str) -> String {
        let res = self
            .post_without_token(routes::JUDGE_LOGIN, &json!({"accessCode": access_code}))
            .await;
        assert_eq!(res.status, 200, "Judge login failed: {}", res.text);
        res.token()
    }

    /// Switch a seeded event's status, keeping its other fields.
    pub async fn set_event_status(&self, event_id: &str, status: &str, token: &str) {
        let current = self.get_without_token(&routes::event(event_id)).await;
        assert_eq!(current.status, 200, "get_event failed: {}", current.text);

        let mut body = current.body.clone();
        body["status"] = json!(status);
        let res = self
            .put_with_token(&routes::event(event_id), &body, token)
            .await;
        assert_eq!(res.status, 200, "set_event_status failed: {}", res.text);
    }

    /// Create an event via the API and return its `id`.
    pub async fn create_event(&self, token: &str, name: &str, status: &str) -> String {
        let res = self
            .post_with_token(
                routes::EVENTS,
                &json!({
                    "name": name,
                    "description": "Event description",
                    "date": "2026-03-01",
                    "location": "Town Hall",
                    "status": status,
                }),
                token,
            )
            .await;
        assert_eq!(res.status, 201, "create_event failed: {}", res.text);
        res.id()
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .expect("response body should contain 'id'")
            .to_string()
    }

    pub fn token(&self) -> String {
        self.body["token"]
            .as_str()
            .expect("response body should contain 'token'")
            .to_string()
    }
}
