use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tower::ServiceExt;

const SCHEMA: &str = r#"
CREATE TABLE player (
    player_id INTEGER PRIMARY KEY,
    gsis_id TEXT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    position TEXT,
    last_changed_date DATE NOT NULL
);
CREATE TABLE performance (
    performance_id INTEGER PRIMARY KEY,
    week_number TEXT NOT NULL,
    fantasy_points REAL NOT NULL,
    player_id INTEGER NOT NULL REFERENCES player(player_id),
    last_changed_date DATE NOT NULL
);
CREATE TABLE league (
    league_id INTEGER PRIMARY KEY,
    league_name TEXT NOT NULL,
    scoring_type TEXT,
    last_changed_date DATE NOT NULL
);
CREATE TABLE team (
    team_id INTEGER PRIMARY KEY,
    team_name TEXT NOT NULL,
    league_id INTEGER NOT NULL REFERENCES league(league_id),
    last_changed_date DATE NOT NULL
);
"#;

const FIXTURES: &str = r#"
INSERT INTO player VALUES (1001, '00-0034857', 'Josh', 'Allen', 'QB', '2024-04-01');
INSERT INTO player VALUES (1002, '00-0035700', 'Josh', 'Jacobs', 'RB', '2024-04-02');
INSERT INTO player VALUES (1003, '00-0033873', 'Patrick', 'Mahomes', 'QB', '2024-04-03');

INSERT INTO performance VALUES (17001, '202301', 20.5, 1001, '2024-03-01');
INSERT INTO performance VALUES (17002, '202302', 3.0, 1001, '2024-03-08');
INSERT INTO performance VALUES (17003, '202301', 12.25, 1002, '2024-03-15');

INSERT INTO league VALUES (5001, 'Pigskin Prodigal Fantasy League', 'PPR', '2024-04-01');
INSERT INTO league VALUES (5002, 'Recurring Champions League', 'Half-PPR', '2024-04-10');

INSERT INTO team VALUES (8001, 'Avocado Dip', 5001, '2024-04-01');
INSERT INTO team VALUES (8002, 'Avocado Dip', 5002, '2024-04-01');
INSERT INTO team VALUES (8003, 'Blitzkrieg', 5002, '2024-04-05');
"#;

/// In-memory store with the schema only.
pub async fn empty_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::raw_sql(SCHEMA).execute(&pool).await.unwrap();
    pool
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    sqlx::raw_sql(FIXTURES).execute(&pool).await.unwrap();
    pool
}

pub async fn seeded_app() -> Router {
    swc_fantasy_api::app(seeded_pool().await)
}

/// Sends a GET and returns the status with the decoded JSON body.
pub async fn get_json(app: Router, uri: &str) -> (u16, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

pub fn field<'a>(body: &'a Value, key: &str) -> Vec<&'a Value> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|item| &item[key])
        .collect()
}
