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

use crate::db::{self, Page, PlayerFilter};
use crate::error::ApiError;
use crate::models::Player;

// Query parameters for listing players
#[derive(Debug, Deserialize)]
pub struct ListPlayersQuery {
    #[serde(default)]
    skip: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
    #[serde(default)]
    minimum_last_changed_date: Option<NaiveDate>,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
}

// GET /v0/players/ - List players matching the given filters
pub async fn get_players(
    State(pool): State<SqlitePool>,
    params: Result<Query<ListPlayersQuery>, QueryRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Query(params) = params?;
    let page = Page::new(params.skip, params.limit)?;
    let filter = PlayerFilter {
        first_name: params.first_name,
        last_name: params.last_name,
        minimum_last_changed_date: params.minimum_last_changed_date,
    };

    tracing::debug!(?filter, ?page, "Listing players");
    let players = db::get_players(&pool, filter, page).await?;

    Ok(Json(players))
}

// GET /v0/players/{player_id} - Get one player by internal ID
pub async fn get_player_by_id(
    State(pool): State<SqlitePool>,
    player_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(player_id) = player_id?;

    let player = db::get_player(&pool, player_id)
        .await?
        .ok_or(ApiError::NotFound("Player not found"))?;

    Ok(Json(player))
}
