use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::handshake::handshake;
use super::handlers::signin::signin;
use super::handlers::signout::signout;
use super::handlers::signup::signup;
use super::handlers::whoami::whoami;
use super::session::SessionCookie;
use crate::domain::guard::service::AuthGuard;
use crate::domain::session::service::SessionService;
use crate::domain::user::service::UserService;
use crate::outbound::registries::InMemoryTokenRegistry;
use crate::outbound::repositories::InMemoryUserRepository;

pub type AppUserService = UserService<InMemoryUserRepository>;
pub type AppSessionService = SessionService<AppUserService, InMemoryTokenRegistry>;
pub type AppGuard = AuthGuard<AppUserService, InMemoryTokenRegistry>;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
    pub session_service: Arc<AppSessionService>,
    pub guard: Arc<AppGuard>,
    pub session_cookie: Arc<SessionCookie>,
}

pub fn create_router(
    user_service: Arc<AppUserService>,
    session_service: Arc<AppSessionService>,
    guard: Arc<AppGuard>,
    session_cookie: Arc<SessionCookie>,
) -> Router {
    let state = AppState {
        user_service,
        session_service,
        guard,
        session_cookie,
    };

    let public_routes = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        .route("/auth/handshake", post(handshake))
        .route("/auth/signout", get(signout));

    // Guarded inside the handler; the guard result carries the user.
    let protected_routes = Router::new().route("/auth/whoami", get(whoami));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
