// src/models/quarterback.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::stats::{PlayoffAppearance, SeasonBonus, WeeklyStat};

/// `squad_id = NULL` means the quarterback is a free agent.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Quarterback {
    pub id: Uuid,
    pub name: String,
    pub nfl_team: String,
    pub squad_id: Option<Uuid>,
    pub season: i32,
}

/// List entry: quarterback with season total, free agents included.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct QuarterbackSummary {
    pub id: Uuid,
    pub name: String,
    pub nfl_team: String,
    pub squad_id: Option<Uuid>,
    pub squad_name: Option<String>,
    pub total_points: f64,
}

/// Raw stat category totals across the season, independent of scoring.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    pub passing_yards: i64,
    pub rushing_yards: i64,
    pub passing_tds: i64,
    pub rushing_tds: i64,
    pub receiving_tds: i64,
    pub interceptions: i64,
    pub fumbles: i64,
    pub games_won: i64,
}

impl AggregateStats {
    pub fn accumulate(&mut self, stat: &WeeklyStat) {
        self.passing_yards += stat.passing_yards as i64;
        self.rushing_yards += stat.rushing_yards as i64;
        self.passing_tds += stat.passing_tds as i64;
        self.rushing_tds += stat.rushing_tds as i64;
        self.receiving_tds += stat.receiving_tds as i64;
        self.interceptions += stat.interceptions as i64;
        self.fumbles += stat.fumbles as i64;
        if stat.game_won {
            self.games_won += 1;
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeeklyStatsBreakdown {
    pub stats: Vec<WeeklyStat>,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BonusBreakdown {
    pub awards: Vec<SeasonBonus>,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayoffBreakdown {
    pub appearances: Vec<PlayoffAppearance>,
    pub total: f64,
}

/// Full scoring breakdown for the quarterback detail endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuarterbackDetail {
    pub qb_id: Uuid,
    pub name: String,
    pub nfl_team: String,
    pub squad_name: Option<String>,
    pub season: i32,
    pub total_points: f64,
    pub weekly_stats: WeeklyStatsBreakdown,
    pub bonuses: BonusBreakdown,
    pub playoffs: PlayoffBreakdown,
    pub aggregate_stats: AggregateStats,
}
