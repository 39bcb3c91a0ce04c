//! Axum route handlers for the Numerology API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::content::ForecastEntry;
use crate::errors::AppError;
use crate::numerology::{personal_day, today_day_of_month, PersonalDayResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PersonalDayQuery {
    pub birth_day: u32,
    /// Defaults to today's day of the month.
    pub current_day: Option<u32>,
}

impl PersonalDayQuery {
    pub fn compute(&self) -> Result<PersonalDayResult, AppError> {
        let current_day = self.current_day.unwrap_or_else(today_day_of_month);
        Ok(personal_day(self.birth_day, current_day)?)
    }
}

#[derive(Debug, Serialize)]
pub struct PersonalDayResponse {
    pub result: PersonalDayResult,
    pub forecast: Option<ForecastEntry>,
}

/// GET /api/v1/numerology/personal-day?birth_day=15[&current_day=20]
///
/// A missing forecast is not an error; `forecast` is simply null.
pub async fn handle_personal_day(
    State(state): State<AppState>,
    Query(params): Query<PersonalDayQuery>,
) -> Result<Json<PersonalDayResponse>, AppError> {
    let result = params.compute()?;
    let forecast = state.content.forecast(result.personal_day).cloned();
    Ok(Json(PersonalDayResponse { result, forecast }))
}
