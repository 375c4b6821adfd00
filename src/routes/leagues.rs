use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use crate::db::{self, LeagueFilter, Page};
use crate::error::ApiError;
use crate::models::League;

// Query parameters for listing leagues
#[derive(Debug, Deserialize)]
pub struct ListLeaguesQuery {
    #[serde(default)]
    skip: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    minimum_last_changed_date: Option<NaiveDate>,
    /// Not unique across leagues
    #[serde(default)]
    league_name: Option<String>,
}

// GET /v0/leagues/ - List leagues matching the given filters
pub async fn get_leagues(
    State(pool): State<SqlitePool>,
    params: Result<Query<ListLeaguesQuery>, QueryRejection>,
) -> Result<Json<Vec<League>>, ApiError> {
    let Query(params) = params?;
    let page = Page::new(params.skip, params.limit)?;
    let filter = LeagueFilter {
        league_name: params.league_name,
        minimum_last_changed_date: params.minimum_last_changed_date,
    };

    tracing::debug!(?filter, ?page, "Listing leagues");
    let leagues = db::get_leagues(&pool, filter, page).await?;

    Ok(Json(leagues))
}

// GET /v0/leagues/{league_id} - Get one league by ID
pub async fn get_league_by_id(
    State(pool): State<SqlitePool>,
    league_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<League>, ApiError> {
    let Path(league_id) = league_id?;

    let league = db::get_league(&pool, league_id)
        .await?
        .ok_or(ApiError::NotFound("League not found"))?;

    Ok(Json(league))
}
