use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// NFL player as returned by the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Player {
    pub player_id: i64,
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub last_changed_date: NaiveDate,
}

/// Row from the player table
#[derive(Debug, sqlx::FromRow)]
pub struct PlayerRow {
    pub player_id: i64,
    pub gsis_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
    pub last_changed_date: NaiveDate,
}

impl PlayerRow {
    pub fn into_player(self) -> Player {
        Player {
            player_id: self.player_id,
            gsis_id: self.gsis_id.filter(|id| !id.is_empty()),
            first_name: self.first_name,
            last_name: self.last_name,
            position: self.position,
            last_changed_date: self.last_changed_date,
        }
    }
}

/// One player's scoring for one week
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Performance {
    pub performance_id: i64,
    pub player_id: i64,
    pub week_number: String,
    pub fantasy_points: f64,
    pub last_changed_date: NaiveDate,
}

#[derive(Debug, sqlx::FromRow)]
pub struct PerformanceRow {
    pub performance_id: i64,
    pub week_number: String,
    pub fantasy_points: f64,
    pub player_id: i64,
    pub last_changed_date: NaiveDate,
}

impl PerformanceRow {
    pub fn into_performance(self) -> Performance {
        Performance {
            performance_id: self.performance_id,
            player_id: self.player_id,
            week_number: self.week_number,
            fantasy_points: self.fantasy_points,
            last_changed_date: self.last_changed_date,
        }
    }
}

/// Fantasy league. Names are not unique across the site.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct League {
    pub league_id: i64,
    pub league_name: String,
    pub scoring_type: Option<String>,
    pub last_changed_date: NaiveDate,
}

#[derive(Debug, sqlx::FromRow)]
pub struct LeagueRow {
    pub league_id: i64,
    pub league_name: String,
    pub scoring_type: Option<String>,
    pub last_changed_date: NaiveDate,
}

impl LeagueRow {
    pub fn into_league(self) -> League {
        League {
            league_id: self.league_id,
            league_name: self.league_name,
            scoring_type: self.scoring_type,
            last_changed_date: self.last_changed_date,
        }
    }
}

/// Fantasy team. Names are unique within a league only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team {
    pub team_id: i64,
    pub team_name: String,
    pub league_id: i64,
    pub last_changed_date: NaiveDate,
}

#[derive(Debug, sqlx::FromRow)]
pub struct TeamRow {
    pub team_id: i64,
    pub team_name: String,
    pub league_id: i64,
    pub last_changed_date: NaiveDate,
}

impl TeamRow {
    pub fn into_team(self) -> Team {
        Team {
            team_id: self.team_id,
            team_name: self.team_name,
            league_id: self.league_id,
            last_changed_date: self.last_changed_date,
        }
    }
}

/// Record counts, computed on every request
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub league_count: i64,
    pub team_count: i64,
    pub player_count: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub message: String,
}
