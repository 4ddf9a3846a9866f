//! HTTP server wiring for QuickPaste (router, handlers, shared state).

/// HTTP error mapping for handlers.
pub mod error;
/// HTTP handlers for page and API endpoints.
pub mod handlers;
/// Minimal HTML rendering helpers.
pub mod render;

pub use quickpaste_core::{config, constants, models, store, AppError, Config, PasteStore};

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// Shared state passed to HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PasteStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Construct shared application state.
    ///
    /// # Arguments
    /// - `config`: Loaded configuration.
    /// - `store`: Open paste store.
    ///
    /// # Returns
    /// A new [`AppState`].
    pub fn new(config: Config, store: PasteStore) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }
}

// Transport body limit: the content limit plus headroom, since JSON string
// escaping and form encoding can expand each character severalfold.
fn body_limit(max_paste_size: usize) -> usize {
    max_paste_size.saturating_mul(6).saturating_add(16 * 1024)
}

/// Create the application router with all routes and middleware.
///
/// # Arguments
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any
///   origin.
///
/// # Returns
/// Configured `axum::Router`.
///
/// # Panics
/// Panics if static header values fail to parse (should not happen).
pub fn create_app(state: AppState, allow_public_access: bool) -> Router {
    let cors = if allow_public_access {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers(tower_http::cors::Any)
    } else {
        CorsLayer::new()
            .allow_origin([
                format!("http://localhost:{}", state.config.port)
                    .parse()
                    .unwrap(),
                format!("http://127.0.0.1:{}", state.config.port)
                    .parse()
                    .unwrap(),
            ])
            .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
    };

    Router::new()
        // HTML routes
        .route("/", get(handlers::pages::index))
        .route("/paste", post(handlers::pages::create_paste))
        .route("/paste/:id", get(handlers::pages::view_paste))
        .route("/raw/:id", get(handlers::pages::raw_paste))
        .route("/delete/:id", get(handlers::pages::delete_paste))
        // API routes
        .route("/api/pastes", get(handlers::api::list_pastes))
        .route("/api/paste", post(handlers::api::create_paste))
        .with_state(state.clone())
        .layer(
            tower::ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(body_limit(state.config.max_paste_size)))
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors)
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                )),
        )
}

/// Resolve the listener address from env var overrides and security policy.
///
/// # Arguments
/// - `config`: Server configuration containing the configured `port`.
/// - `allow_public_access`: Whether non-loopback bind targets are permitted.
///
/// # Returns
/// A validated socket address that enforces loopback when public access is
/// disabled.
pub fn resolve_bind_address(config: &Config, allow_public_access: bool) -> SocketAddr {
    resolve_bind_address_from(
        std::env::var("BIND").ok().as_deref(),
        config,
        allow_public_access,
    )
}

fn resolve_bind_address_from(
    bind: Option<&str>,
    config: &Config,
    allow_public_access: bool,
) -> SocketAddr {
    let default_bind = SocketAddr::from(([127, 0, 0, 1], config.port));
    let requested = match bind {
        Some(value) => match value.trim().parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(err) => {
                tracing::warn!(
                    "Invalid BIND='{}': {}. Falling back to {}",
                    value,
                    err,
                    default_bind
                );
                default_bind
            }
        },
        None => default_bind,
    };

    if allow_public_access || requested.ip().is_loopback() {
        return requested;
    }

    tracing::warn!(
        "Non-loopback bind {} requested without ALLOW_PUBLIC_ACCESS; forcing 127.0.0.1",
        requested
    );
    SocketAddr::from(([127, 0, 0, 1], requested.port()))
}

/// Run the Axum server with graceful shutdown support.
///
/// # Arguments
/// - `listener`: Bound TCP listener for the server.
/// - `state`: Shared application state.
/// - `allow_public_access`: Whether to allow cross-origin requests from any
///   origin.
/// - `shutdown_signal`: Future that resolves when shutdown should start.
///
/// # Errors
/// Returns any I/O error produced by `axum::serve`.
pub async fn serve_router(
    listener: tokio::net::TcpListener,
    state: AppState,
    allow_public_access: bool,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let app = create_app(state, allow_public_access);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}
