use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;

use crate::db::{self, Page, TeamFilter};
use crate::error::ApiError;
use crate::models::Team;

// Query parameters for listing teams
#[derive(Debug, Deserialize)]
pub struct ListTeamsQuery {
    #[serde(default)]
    skip: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    minimum_last_changed_date: Option<NaiveDate>,
    /// Unique within a league, not across leagues
    #[serde(default)]
    team_name: Option<String>,
    #[serde(default)]
    league_id: Option<i64>,
}

// GET /v0/teams/ - List teams matching the given filters
pub async fn get_teams(
    State(pool): State<SqlitePool>,
    params: Result<Query<ListTeamsQuery>, QueryRejection>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let Query(params) = params?;
    let page = Page::new(params.skip, params.limit)?;
    let filter = TeamFilter {
        team_name: params.team_name,
        league_id: params.league_id,
        minimum_last_changed_date: params.minimum_last_changed_date,
    };

    tracing::debug!(?filter, ?page, "Listing teams");
    let teams = db::get_teams(&pool, filter, page).await?;

    Ok(Json(teams))
}
