use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderName, Method, Request, Response, StatusCode, Uri},
    routing::get,
};
use tower::{Layer, limit::ConcurrencyLimitLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::{response::ErrorResponse, state::AppState};

pub mod doc;
pub mod favorites;
pub mod health;
pub mod people;
pub mod planets;
pub mod users;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// The served application. Trailing slashes are trimmed before routing, so
/// `/people/1/` reaches the same handler as `/people/1`.
pub type App = NormalizePath<Router>;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(people::router())
        .merge(planets::router())
        .merge(users::router())
        .merge(favorites::router())
}

/// The full application: API routes, sitemap, docs and the middleware stack.
pub fn create_router(state: AppState) -> App {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id
            )
        })
        .on_request(|_request: &Request<_>, _span: &tracing::Span| {
            tracing::info!("request started");
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    // Any origin may call the API.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/", get(doc::sitemap))
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state);

    // Path normalization has to run before routing.
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(path = %uri.path(), "no route matched");
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new("Not Found")))
}

async fn method_not_allowed(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(%method, path = %uri.path(), "method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method Not Allowed")),
    )
}
