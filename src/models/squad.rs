// src/models/squad.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Only a squad's five highest-scoring quarterbacks count toward its
/// standings total, however many are rostered.
pub const TOP_QB_COUNT: usize = 5;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Squad {
    pub id: Uuid,
    pub name: String,
    pub owner: String,
    pub season: i32,
}

/// Squad list entry with its standings total and roster size.
#[derive(Debug, Serialize, Deserialize)]
pub struct SquadSummary {
    pub id: Uuid,
    pub name: String,
    pub owner: String,
    pub season: i32,
    pub total_points: f64,
    pub qb_count: usize,
}

/// One roster slot in the squad roster response.
#[derive(Debug, Serialize, Deserialize)]
pub struct RosterEntry {
    pub qb_id: Uuid,
    pub name: String,
    pub nfl_team: String,
    pub total_points: f64,
    pub rank: usize,
    pub is_top_5: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SquadRosterResponse {
    pub squad_id: Uuid,
    pub squad_name: String,
    pub owner: String,
    pub season: i32,
    pub roster: Vec<RosterEntry>,
}
