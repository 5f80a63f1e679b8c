pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::horoscope::handlers as horoscope;
use crate::state::AppState;
use crate::zodiac::handlers as zodiac;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/horoscope", post(horoscope::handle_generate))
        .route("/api/zodiac/signs", get(zodiac::handle_list_signs))
        .route("/api/zodiac/resolve", get(zodiac::handle_resolve))
        .with_state(state)
}
