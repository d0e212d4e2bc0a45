//! HTTP routes.

pub mod betslip;
pub mod leaderboard;
pub mod user;

use std::sync::Arc;

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::{Next, from_fn},
    response::Response,
    routing::{get, post},
};

use http::{HeaderValue, Method, StatusCode, header};

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::app::{AppState, error::AppErrorKind};

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::<AppState>::new()
        .route("/register", post(user::auth::register))
        .route("/login", post(user::auth::login))
        .route("/leaderboard", get(leaderboard::show))
        .route("/profile", get(user::show_me))
        .route("/betslip", post(betslip::create))
        .route("/betslips/{betslip_id}/comments", post(betslip::comment::create))
        .with_state(state);

    Router::new()
        .merge(api_routes.layer(from_fn(security_headers)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(from_fn(preflight_no_content))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request| {
                    let method = req.method();
                    let uri = req.uri();

                    // axum automatically adds this extension.
                    let matched_path = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::debug_span!("request", %method, %uri, matched_path)
                })
                // By default `TraceLayer` will log 5xx responses but we're doing our specific
                // logging of errors so disable that
                .on_failure(()),
        )
        .layer(from_fn(log_app_errors))
}

async fn security_headers(request: Request, next: Next) -> Response {
    let mut res = next.run(request).await;

    res.headers_mut().extend([
        (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static("frame-ancestors 'none'"),
        ),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
    ]);

    res
}

/// Answers every `OPTIONS` request with `204 No Content`.
///
/// Runs outside of the CORS layer so preflights still get their headers.
async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let mut res = next.run(request).await;

    if is_options {
        *res.status_mut() = StatusCode::NO_CONTENT;
    }

    res
}

async fn log_app_errors(request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    // If the response contains an AppErrorKind Extension, log it.
    if let Some(err) = response.extensions().get::<Arc<AppErrorKind>>() {
        tracing::error!(?err, "an unexpected error occurred inside a handler");
    }
    response
}
