//! Read-only HTTP API over SportsWorldCentral fantasy football data.

use axum::{routing::get, Router};
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::{ApiError, ConfigError};

/// Builds the full router around an already-open store handle.
pub fn app(pool: SqlitePool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health
        .route("/", get(routes::health::health_check))

        // Player endpoints
        .route("/v0/players/", get(routes::players::get_players))
        .route("/v0/players/{player_id}", get(routes::players::get_player_by_id))

        // Scoring endpoints
        .route("/v0/performances/", get(routes::performances::get_performances))

        // Membership endpoints
        .route("/v0/leagues/", get(routes::leagues::get_leagues))
        .route("/v0/leagues/{league_id}", get(routes::leagues::get_league_by_id))
        .route("/v0/teams/", get(routes::teams::get_teams))

        // Analytics
        .route("/v0/counts/", get(routes::counts::get_counts))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
