pub mod collars;
pub mod error;
pub mod tasks;
pub mod users;

use crate::middleware::correlation::correlation_middleware;
use crate::{AppState, openapi};
use axum::Router;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(users::router(state.clone()))
        .merge(collars::router(state.clone()))
        .merge(tasks::router(state))
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .route_layer(middleware::from_fn(correlation_middleware));

    Router::new().nest("/api", api)
}
