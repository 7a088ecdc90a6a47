// src/models/sync.rs
use serde::{Deserialize, Serialize};

/// Season aggregate stat row as published by the NFL data provider.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderSeasonStatRow {
    pub player_name: String,
    pub position: String,
    #[serde(default)]
    pub passing_yards: i32,
    #[serde(default)]
    pub rushing_yards: i32,
    #[serde(default)]
    pub passing_tds: i32,
    #[serde(default)]
    pub rushing_tds: i32,
    #[serde(default)]
    pub receiving_tds: i32,
    #[serde(default)]
    pub interceptions: i32,
    #[serde(default)]
    pub fumbles_lost: i32,
}

/// One game result row from the provider schedule feed. `game_type` is
/// the provider's code: REG, WC, DIV, CON, SB.
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderGame {
    pub season: i32,
    pub week: i32,
    pub game_type: String,
    pub home_team: String,
    pub away_team: String,
    pub home_qb_name: Option<String>,
    pub away_qb_name: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    /// Local kickoff time, "HH:MM". Games at 17:00 or later count as
    /// prime time.
    pub kickoff: Option<String>,
}

impl ProviderGame {
    pub fn is_completed(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }

    pub fn is_prime_time(&self) -> bool {
        self.kickoff
            .as_deref()
            .and_then(|t| t.split(':').next())
            .and_then(|h| h.parse::<u32>().ok())
            .map(|h| h >= 17)
            .unwrap_or(false)
    }
}

/// Season award row (Player of the Week / Player of the Month).
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderAwardRow {
    pub player_name: String,
    /// Provider award code: POW or POM.
    pub award: String,
}

/// Counts returned by every sync operation. `skipped` are idempotent
/// no-ops on already-credited records, never failures.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct SyncSummary {
    pub season: i32,
    pub created: u32,
    pub updated: u32,
    pub skipped: u32,
    pub unresolved: Vec<String>,
}

impl SyncSummary {
    pub fn new(season: i32) -> Self {
        Self {
            season,
            ..Self::default()
        }
    }
}
