use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use crate::db::{self, Page, PerformanceFilter};
use crate::error::ApiError;
use crate::models::Performance;

#[derive(Debug, Deserialize)]
pub struct ListPerformancesQuery {
    #[serde(default)]
    skip: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    minimum_last_changed_date: Option<NaiveDate>,
}

// GET /v0/performances/ - List weekly scoring performances
pub async fn get_performances(
    State(pool): State<SqlitePool>,
    params: Result<Query<ListPerformancesQuery>, QueryRejection>,
) -> Result<Json<Vec<Performance>>, ApiError> {
    let Query(params) = params?;
    let page = Page::new(params.skip, params.limit)?;
    let filter = PerformanceFilter {
        minimum_last_changed_date: params.minimum_last_changed_date,
    };

    tracing::debug!(?filter, ?page, "Listing performances");
    let performances = db::get_performances(&pool, filter, page).await?;

    Ok(Json(performances))
}
