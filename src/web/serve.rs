use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderName, Request, Response},
    middleware, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    classify::{ServerErrorsAsFailures, SharedClassifier},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{MakeSpan, OnRequest, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::{App, Result};

use super::{midware, routes::routes, REQUEST_ID_HEADER};

/// The core async function returning a future that will serve this application.
///
/// Accepts an `App` (state + bound listener) and sets up a TraceLayer that provides console logging.
///
/// Current implementation might return an IO error from `axum::serve`
pub async fn serve(app: App) -> Result<()> {
    let App {
        app_state,
        listener,
    } = app;

    axum::serve(listener, app_router(routes(app_state))).await?;

    Ok(())
}

/// Wraps the routes in the middleware stack shared by every request.
fn app_router(routes: Router) -> Router {
    let x_request_id: HeaderName = HeaderName::from_static(REQUEST_ID_HEADER);

    routes.layer(
        ServiceBuilder::new()
            // Set UUID per request
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                MakeRequestUuid,
            ))
            .layer(build_trace_layer())
            // The response travels the stack bottom-up, so the Propagation layer below runs first
            // and the response mapper can read the request id from the response headers.
            .layer(middleware::map_response(midware::response_mapper))
            // Propagate UUID to response, keep it last so it processes the response first!
            .layer(PropagateRequestIdLayer::new(x_request_id)),
    )
}

/// Opens one `request` span per request, tagged with its request id, and logs the outcome.
/// Client errors are logged as warnings, server errors as errors.
fn build_trace_layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl MakeSpan<Body> + Clone,
    impl OnRequest<Body> + Clone,
    impl OnResponse<Body> + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            let req_id = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|id| id.to_str().ok())
                .unwrap_or_default();

            tracing::info_span!(
                "request",
                req_id,
                method = %req.method(),
                path = req.uri().path()
            )
        })
        .on_request(|_req: &Request<Body>, _s: &Span| tracing::debug!("received"))
        .on_response(|res: &Response<Body>, latency: Duration, _s: &Span| {
            let status = res.status();
            let latency_ms = latency.as_millis() as u64;

            if status.is_server_error() {
                tracing::error!(%status, latency_ms, "failed")
            } else if status.is_client_error() {
                tracing::warn!(%status, latency_ms, "rejected")
            } else {
                tracing::info!(%status, latency_ms, "served")
            }
        })
}
