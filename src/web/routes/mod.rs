//! Contains all the routes that this application can handle.

mod api;
mod home;

use crate::{web::SUBSCRIBE_PATH, AppState};
use home::home;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    let static_files = ServeDir::new(&app_state.site.static_dir);

    Router::new()
        .route("/", get(home))
        .with_state(app_state)
        .route(
            SUBSCRIBE_PATH,
            post(api::subscribe).fallback(api::method_not_allowed),
        )
        .nest_service("/static", static_files)
        .route("/health-check", get(health_check))
}
