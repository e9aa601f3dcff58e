use axum::extract::Query;
use axum::response::Response;
use serde::Deserialize;

use super::plain_text;
use crate::shared::error::PosError;
use crate::usecases::u502_period_summary;

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub year: i32,
    pub month: u32,
}

/// GET /api/reports/period-summary?year=&month=
pub async fn period_summary(Query(query): Query<PeriodQuery>) -> Result<Response, PosError> {
    let text = u502_period_summary::service::period_summary(query.year, query.month).await?;
    Ok(plain_text(text))
}
