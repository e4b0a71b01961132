use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::roster))
        .route("/players", post(handlers::create_player))
        .route("/players/:id", get(handlers::player_detail))
        .route("/players/:id/delete", post(handlers::delete_player))
        .with_state(state)
}
