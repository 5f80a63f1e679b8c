//! Axum route handlers for the Horoscope API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::horoscope::models::{HoroscopeRequest, HoroscopeResult};
use crate::state::AppState;

/// POST /api/horoscope
///
/// Body: `{"sign": "Leo", "period": "daily" | "weekly"}`.
/// Returns the four-section horoscope, or `{"error": ...}` with 400/500.
pub async fn handle_generate(
    State(state): State<AppState>,
    request: Result<Json<HoroscopeRequest>, JsonRejection>,
) -> Result<Json<HoroscopeResult>, AppError> {
    let Json(request) = request?;

    let result = state.horoscope.generate(&request).await?;

    Ok(Json(result))
}
