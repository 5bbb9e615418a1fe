//! Contains all the routes that this application can handle.

mod activities;
mod home;

use axum::{
    http::StatusCode,
    routing::{delete, get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::AppState;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.static_dir);

    Router::new()
        .route("/", get(home::home))
        .merge(activities_routes(app_state))
        .nest_service("/static", static_files)
        .route("/health-check", get(health_check))
}

/// ACTIVITIES - the catalog and the routes that change its participants
fn activities_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/activities", get(activities::list))
        .route("/activities/{activity_name}/signup", post(activities::signup))
        .route(
            "/activities/{activity_name}/unregister",
            delete(activities::unregister),
        )
        .with_state(app_state)
}
