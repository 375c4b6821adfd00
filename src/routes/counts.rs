use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::Counts;

// GET /v0/counts/ - League, team and player counts, for use with skip/limit
pub async fn get_counts(State(pool): State<SqlitePool>) -> Result<Json<Counts>, ApiError> {
    let counts = db::get_counts(&pool).await?;
    Ok(Json(counts))
}
