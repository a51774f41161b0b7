use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::hedgehogs::create_hedgehog;
use super::handlers::hedgehogs::delete_hedgehog;
use super::handlers::hedgehogs::get_hedgehog;
use super::handlers::hedgehogs::list_hedgehogs;
use super::handlers::hedgehogs::update_hedgehog;
use super::handlers::profiles::get_profile_by_username;
use super::handlers::profiles::update_own_profile;
use super::handlers::users::get_current_user;
use super::handlers::users::login;
use super::handlers::users::register_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::hedgehog::ports::HedgehogServicePort;
use crate::domain::profile::ports::ProfileServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub profile_service: Arc<dyn ProfileServicePort>,
    pub hedgehog_service: Arc<dyn HedgehogServicePort>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    profile_service: Arc<dyn ProfileServicePort>,
    hedgehog_service: Arc<dyn HedgehogServicePort>,
) -> Router {
    let state = AppState {
        user_service,
        profile_service,
        hedgehog_service,
    };

    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/api/users", post(register_user))
        .route("/api/users/login/token", post(login))
        .route("/api/hedgehogs", get(list_hedgehogs))
        .route("/api/hedgehogs/:id", get(get_hedgehog));

    let protected_routes = Router::new()
        .route("/api/users/me", get(get_current_user))
        .route("/api/profiles/me", put(update_own_profile))
        .route("/api/profiles/:username", get(get_profile_by_username))
        .route("/api/hedgehogs", post(create_hedgehog))
        .route(
            "/api/hedgehogs/:id",
            put(update_hedgehog).delete(delete_hedgehog),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

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

async fn health() -> &'static str {
    "ok"
}
