//! Router assembly: routes, CORS and request tracing.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Request, Response};
use axum::routing::{get, post};
use axum::Router;
use pipecheck_config::ServerConfig;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;

pub fn router(config: &ServerConfig) -> Result<Router> {
    let cors = cors_layer(&config.allowed_origin)?;

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    Ok(Router::new()
        .route("/", get(handlers::ping))
        .route("/pipelines/parse", post(handlers::pipeline::parse))
        // Pipelines are accepted whatever their size.
        .layer(DefaultBodyLimit::disable())
        .layer(trace_layer)
        .layer(cors))
}

/// Single-origin CORS with credentials. Wildcards are invalid alongside
/// credentials, so methods and headers are mirrored from the request.
fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("invalid allowed origin: {}", origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
