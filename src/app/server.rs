use crate::adapters::api_client::GENERATE_PATH;
use crate::app::handlers::{generate_passphrases, health, method_not_allowed, preflight, AppState};
use crate::utils::error::Result;
use axum::http::{HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

pub const HEALTH_PATH: &str = "/api/health";

const ALLOWED_HEADERS: [&str; 9] = [
    "x-csrf-token",
    "x-requested-with",
    "accept",
    "accept-version",
    "content-length",
    "content-md5",
    "content-type",
    "date",
    "x-api-version",
];

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ])
        .allow_headers(ALLOWED_HEADERS.map(HeaderName::from_static))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            GENERATE_PATH,
            post(generate_passphrases)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .route(HEALTH_PATH, get(health))
        .layer(cors_layer())
        .with_state(state)
}

pub async fn serve(state: AppState, bind_addr: &str) -> Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;

    tracing::info!("🌐 HTTP listening on http://{}", bind_addr);
    tracing::info!("🛠 Generate endpoint at http://{}{}", bind_addr, GENERATE_PATH);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
