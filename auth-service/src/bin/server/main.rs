use std::sync::Arc;

use auth::SessionSealer;
use auth_service::config::Config;
use auth_service::domain::guard::service::AuthGuard;
use auth_service::domain::session::service::SessionService;
use auth_service::domain::user::service::UserService;
use auth_service::inbound::http::router::create_router;
use auth_service::inbound::http::session::SessionCookie;
use auth_service::outbound::registries::InMemoryTokenRegistry;
use auth_service::outbound::repositories::InMemoryUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "auth-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        cookie_name = %config.session.cookie_name,
        expiration_hours = config.session.expiration_hours,
        secure_cookie = config.session.secure_cookie,
        require_handshake = config.guard.require_handshake,
        "Configuration loaded"
    );

    let sealer = SessionSealer::new(
        config.session.secret.as_bytes(),
        chrono::Duration::hours(config.session.expiration_hours),
    )?;
    let session_cookie = Arc::new(SessionCookie::new(
        sealer,
        config.session.cookie_name.clone(),
        config.session.secure_cookie,
    ));

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let token_registry = Arc::new(InMemoryTokenRegistry::new());
    tracing::info!(storage = "memory", "Credential store and token registry created");

    let user_service = Arc::new(UserService::new(user_repository));
    let session_service = Arc::new(SessionService::new(
        Arc::clone(&user_service),
        Arc::clone(&token_registry),
    ));
    let guard = Arc::new(AuthGuard::new(
        Arc::clone(&user_service),
        Arc::clone(&token_registry),
        config.guard.require_handshake,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, session_service, guard, session_cookie);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
