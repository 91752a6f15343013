use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/filter", post(handlers::set_filter))
        .route("/complete/:id", post(handlers::complete))
        .route("/tomorrow/toggle", post(handlers::toggle_tomorrow))
        .route("/api/board", get(handlers::get_board))
        .route("/api/complete", post(handlers::api_complete))
        .with_state(state)
}
