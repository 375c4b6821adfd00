use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::Config;
use crate::models::*;

pub mod query;

pub use query::{Filter, Page, PageError};
use query::Entity;

impl Entity for PlayerRow {
    const TABLE: &'static str = "player";
    const ID_COLUMN: &'static str = "player_id";
    const COLUMNS: &'static str = "player_id, gsis_id, first_name, last_name, position, last_changed_date";
}

impl Entity for PerformanceRow {
    const TABLE: &'static str = "performance";
    const ID_COLUMN: &'static str = "performance_id";
    const COLUMNS: &'static str = "performance_id, week_number, fantasy_points, player_id, last_changed_date";
}

impl Entity for LeagueRow {
    const TABLE: &'static str = "league";
    const ID_COLUMN: &'static str = "league_id";
    const COLUMNS: &'static str = "league_id, league_name, scoring_type, last_changed_date";
}

impl Entity for TeamRow {
    const TABLE: &'static str = "team";
    const ID_COLUMN: &'static str = "team_id";
    const COLUMNS: &'static str = "team_id, team_name, league_id, last_changed_date";
}

/// Opens the pool read-only; nothing in this service writes.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?.read_only(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

#[derive(Debug, Default, Clone)]
pub struct PlayerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub minimum_last_changed_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Clone)]
pub struct PerformanceFilter {
    pub minimum_last_changed_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Clone)]
pub struct LeagueFilter {
    pub league_name: Option<String>,
    pub minimum_last_changed_date: Option<NaiveDate>,
}

#[derive(Debug, Default, Clone)]
pub struct TeamFilter {
    pub team_name: Option<String>,
    pub league_id: Option<i64>,
    pub minimum_last_changed_date: Option<NaiveDate>,
}

// Player queries
pub async fn get_players(pool: &SqlitePool, filter: PlayerFilter, page: Page) -> Result<Vec<Player>, sqlx::Error> {
    let filter = Filter::new()
        .at_least("last_changed_date", filter.minimum_last_changed_date)
        .eq("first_name", filter.first_name)
        .eq("last_name", filter.last_name);

    let rows = query::fetch_page::<PlayerRow>(pool, &filter, page).await?;
    Ok(rows.into_iter().map(PlayerRow::into_player).collect())
}

pub async fn get_player(pool: &SqlitePool, player_id: i64) -> Result<Option<Player>, sqlx::Error> {
    let row = query::fetch_by_id::<PlayerRow>(pool, player_id).await?;
    Ok(row.map(PlayerRow::into_player))
}

// Performance queries
pub async fn get_performances(
    pool: &SqlitePool,
    filter: PerformanceFilter,
    page: Page,
) -> Result<Vec<Performance>, sqlx::Error> {
    let filter = Filter::new().at_least("last_changed_date", filter.minimum_last_changed_date);

    let rows = query::fetch_page::<PerformanceRow>(pool, &filter, page).await?;
    Ok(rows.into_iter().map(PerformanceRow::into_performance).collect())
}

// League queries
pub async fn get_leagues(pool: &SqlitePool, filter: LeagueFilter, page: Page) -> Result<Vec<League>, sqlx::Error> {
    let filter = Filter::new()
        .at_least("last_changed_date", filter.minimum_last_changed_date)
        .eq("league_name", filter.league_name);

    let rows = query::fetch_page::<LeagueRow>(pool, &filter, page).await?;
    Ok(rows.into_iter().map(LeagueRow::into_league).collect())
}

pub async fn get_league(pool: &SqlitePool, league_id: i64) -> Result<Option<League>, sqlx::Error> {
    let row = query::fetch_by_id::<LeagueRow>(pool, league_id).await?;
    Ok(row.map(LeagueRow::into_league))
}

// Team queries
pub async fn get_teams(pool: &SqlitePool, filter: TeamFilter, page: Page) -> Result<Vec<Team>, sqlx::Error> {
    let filter = Filter::new()
        .at_least("last_changed_date", filter.minimum_last_changed_date)
        .eq("team_name", filter.team_name)
        .eq("league_id", filter.league_id);

    let rows = query::fetch_page::<TeamRow>(pool, &filter, page).await?;
    Ok(rows.into_iter().map(TeamRow::into_team).collect())
}

// Count queries
pub async fn get_player_count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    query::count::<PlayerRow>(pool).await
}

pub async fn get_league_count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    query::count::<LeagueRow>(pool).await
}

pub async fn get_team_count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    query::count::<TeamRow>(pool).await
}

/// All three counts. Each is its own read, so they are not a joint snapshot.
pub async fn get_counts(pool: &SqlitePool) -> Result<Counts, sqlx::Error> {
    Ok(Counts {
        league_count: get_league_count(pool).await?,
        team_count: get_team_count(pool).await?,
        player_count: get_player_count(pool).await?,
    })
}
