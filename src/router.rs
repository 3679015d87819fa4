use axum::{routing::get, Router};

use crate::{
    controller::status::{alive, get_status},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alive))
        .route("/api/status", get(get_status))
}
