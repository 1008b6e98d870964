use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use hydroflow_order::{summarize, CashSummary};
use serde::Deserialize;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub date: Option<NaiveDate>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/cash/summary", get(cash_summary))
}

/// GET /cash/summary?date=YYYY-MM-DD
/// The day's register, grouped by payment method and by service. Defaults
/// to the current UTC date.
async fn cash_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<CashSummary>, AppError> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());

    let orders = state
        .orders
        .list_orders_for_day(date)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(summarize(date, &orders)))
}
