use std::time::Duration;

use axum::Router;
use axum::extract::{self, MatchedPath, State};
use axum::http::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use tower_http::LatencyUnit;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;

pub mod error;
pub mod openapi;
pub mod ping;
pub mod users;

/// Full HTTP surface: ping, user CRUD, static docs and the generated OpenAPI UI,
/// wrapped in the per-request timeout and request logging.
pub fn router(ctx: AppContext) -> Router {
    let docs_dir = ctx.cfg.docs_dir.clone();
    let request_timeout = ctx.cfg.request_timeout;

    Router::new()
        .merge(ping::routes())
        .merge(users::routes(ctx))
        .nest_service("/docs", ServeDir::new(docs_dir))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .layer(middleware::from_fn_with_state(
            request_timeout,
            enforce_request_timeout,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    let matched = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|p| p.as_str().to_string())
                        .unwrap_or_default();
                    tracing::info_span!("http", %method, %uri, matched_path = %matched)
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}

// Dropping the inner future cancels any in-flight store call.
async fn enforce_request_timeout(
    State(limit): State<Duration>,
    req: extract::Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(req)).await {
        Ok(resp) => resp,
        Err(_) => {
            tracing::warn!(%path, timeout_ms = limit.as_millis() as u64, "request_timed_out");
            ApiError::Internal("Request timed out").into_response()
        }
    }
}
