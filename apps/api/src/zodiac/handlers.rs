//! Axum route handlers for sign metadata and birth-date lookup.

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::zodiac::{resolve, ZodiacSign};

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// ISO date, `YYYY-MM-DD`.
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct SignView {
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub dates: &'static str,
    pub display_dates: &'static str,
}

impl From<ZodiacSign> for SignView {
    fn from(sign: ZodiacSign) -> Self {
        Self {
            id: sign.id(),
            name: sign.display_name(),
            symbol: sign.symbol(),
            dates: sign.dates(),
            display_dates: sign.display_dates(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub date: NaiveDate,
    pub sign: SignView,
}

/// GET /api/zodiac/signs
pub async fn handle_list_signs() -> Json<Vec<SignView>> {
    Json(ZodiacSign::all().map(SignView::from).collect())
}

/// GET /api/zodiac/resolve?date=YYYY-MM-DD
pub async fn handle_resolve(
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Result<Json<ResolveResponse>, AppError> {
    let Query(ResolveQuery { date }) = query?;

    let sign = resolve(date)
        .ok_or_else(|| AppError::Validation(format!("Не удалось определить знак для {date}")))?;

    Ok(Json(ResolveResponse {
        date,
        sign: sign.into(),
    }))
}
