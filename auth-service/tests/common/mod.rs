use std::sync::Arc;

use auth::SessionSealer;
use auth_service::domain::guard::service::AuthGuard;
use auth_service::domain::session::service::SessionService;
use auth_service::domain::user::models::EmailAddress;
use auth_service::domain::user::service::UserService;
use auth_service::inbound::http::router::create_router;
use auth_service::inbound::http::session::SessionCookie;
use auth_service::outbound::registries::InMemoryTokenRegistry;
use auth_service::outbound::repositories::InMemoryUserRepository;
use reqwest::header::COOKIE;
use reqwest::header::SET_COOKIE;
use serde_json::json;

pub const COOKIE_NAME: &str = "session";
const SECRET: &[u8] = b"test-secret-key-for-session-sealing-at-least-32-bytes";

/// Test application that spawns a real server
///
/// The client keeps no cookie store: tests carry the session cookie by
/// hand so they can replay stale cookies.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_registry: Arc<InMemoryTokenRegistry>,
    pub user_repository: Arc<InMemoryUserRepository>,
}

/// Outcome of a successful signin.
pub struct SignedIn {
    pub cookie: String,
    pub token: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Spawn the application in a background task and return TestApp
    pub async fn spawn_with(require_handshake: bool) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_repository = Arc::new(InMemoryUserRepository::new());
        let token_registry = Arc::new(InMemoryTokenRegistry::new());

        let user_service = Arc::new(UserService::new(Arc::clone(&user_repository)));
        let session_service = Arc::new(SessionService::new(
            Arc::clone(&user_service),
            Arc::clone(&token_registry),
        ));
        let guard = Arc::new(AuthGuard::new(
            Arc::clone(&user_service),
            Arc::clone(&token_registry),
            require_handshake,
        ));

        let sealer = SessionSealer::new(SECRET, chrono::Duration::hours(24))
            .expect("Failed to create session sealer");
        let session_cookie = Arc::new(SessionCookie::new(sealer, COOKIE_NAME, false));

        let router = create_router(user_service, session_service, guard, session_cookie);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_registry,
            user_repository,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request carrying a session cookie
    pub fn get_with_cookie(&self, path: &str, cookie: &str) -> reqwest::RequestBuilder {
        self.get(path).header(COOKIE, cookie)
    }

    /// Helper to call the protected endpoint with session cookie and bearer token
    pub fn whoami(&self, cookie: &str, token: &str) -> reqwest::RequestBuilder {
        self.get_with_cookie("/auth/whoami", cookie)
            .bearer_auth(token)
    }

    pub async fn signup(&self, email: &str, name: &str, password: &str) -> reqwest::Response {
        self.post("/auth/signup")
            .json(&json!({
                "email": email,
                "name": name,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Sign in, optionally continuing an existing session cookie.
    pub async fn signin(&self, email: &str, password: &str, cookie: Option<&str>) -> SignedIn {
        let mut request = self.post("/auth/signin").json(&json!({
            "email": email,
            "password": password
        }));
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await.expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let cookie = session_cookie(&response).expect("Signin did not set a session cookie");
        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        let token = body["data"]["token"]
            .as_str()
            .expect("Signin response has no token")
            .to_string();

        SignedIn { cookie, token }
    }

    /// Create a user and sign them in.
    pub async fn signed_in_user(&self, email: &str) -> SignedIn {
        self.signup(email, "Test User", "pass_word!").await;
        self.signin(email, "pass_word!", None).await
    }

    pub async fn live_tokens(&self, email: &str) -> usize {
        let email = EmailAddress::new(email.to_string()).expect("Invalid test email");
        self.token_registry.live_tokens(&email).await
    }
}

/// Extract the `name=value` pair of the session cookie from a response.
pub fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{}=", COOKIE_NAME)))
        .map(str::to_string)
}
