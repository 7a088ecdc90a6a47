// src/league/standings.rs
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::LeagueError;
use crate::league::payout::PayoutTable;
use crate::models::quarterback::QuarterbackSummary;
use crate::models::squad::{Squad, TOP_QB_COUNT};
use crate::scoring::round2;

/// One quarterback's contribution to a squad scoresheet.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QbPoints {
    pub qb_id: Uuid,
    pub name: String,
    pub nfl_team: String,
    pub total_points: f64,
}

/// A squad with all of its rostered quarterbacks scored.
#[derive(Debug, Clone)]
pub struct SquadScoresheet {
    pub squad: Squad,
    pub qbs: Vec<QbPoints>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SquadStanding {
    pub squad_id: Uuid,
    pub squad_name: String,
    pub owner: String,
    pub rank: usize,
    pub total_points: f64,
    pub projected_payout: i64,
    pub top_qbs: Vec<QbPoints>,
}

/// Sort quarterbacks for roster/standings purposes: points descending,
/// ties broken by ascending id for determinism.
pub fn sort_roster(qbs: &mut [QbPoints]) {
    qbs.sort_by(|a, b| {
        b.total_points
            .partial_cmp(&a.total_points)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.qb_id.cmp(&b.qb_id))
    });
}

/// Squad total under the top-5 rule: only the five highest-scoring
/// quarterbacks count, the rest of the roster never affects the total.
pub fn squad_total(qbs: &[QbPoints]) -> f64 {
    round2(qbs.iter().take(TOP_QB_COUNT).map(|q| q.total_points).sum())
}

/// Rank squads by total points (ties broken by ascending squad id) and
/// attach the projected payout for each rank.
pub fn rank_squads(mut sheets: Vec<SquadScoresheet>, payout: &PayoutTable) -> Vec<SquadStanding> {
    for sheet in &mut sheets {
        sort_roster(&mut sheet.qbs);
    }

    let mut ranked: Vec<(Squad, f64, Vec<QbPoints>)> = sheets
        .into_iter()
        .map(|sheet| {
            let SquadScoresheet { squad, qbs } = sheet;
            let total = squad_total(&qbs);
            let top_qbs: Vec<QbPoints> = qbs.into_iter().take(TOP_QB_COUNT).collect();
            (squad, total, top_qbs)
        })
        .collect();

    let squad_count = ranked.len();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.id.cmp(&b.0.id))
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, (squad, total_points, top_qbs))| {
            let rank = i + 1;
            SquadStanding {
                squad_id: squad.id,
                squad_name: squad.name,
                owner: squad.owner,
                rank,
                total_points,
                projected_payout: payout.projected_payout(rank, squad_count),
                top_qbs,
            }
        })
        .collect()
}

/// The league-name tradition: the rostered quarterback with the lowest
/// positive total. Free agents and quarterbacks at or below zero are
/// excluded; ties go to the lowest id. None when nobody qualifies.
pub fn worst_rostered_qb(qbs: &[QuarterbackSummary]) -> Option<QuarterbackSummary> {
    qbs.iter()
        .filter(|qb| qb.total_points > 0.0 && qb.squad_id.is_some())
        .min_by(|a, b| {
            a.total_points
                .partial_cmp(&b.total_points)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        })
        .cloned()
}

/// Read-side standings assembly over a single store snapshot.
#[derive(Debug)]
pub struct StandingsService {
    pool: PgPool,
}

impl StandingsService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build the ranked standings for a season.
    pub async fn build_standings(
        &self,
        season: i32,
        payout: &PayoutTable,
    ) -> Result<Vec<SquadStanding>, LeagueError> {
        let squads = db::squads::list_by_season(&self.pool, season).await?;
        let summaries = db::quarterbacks::list_summaries(&self.pool, season).await?;

        let sheets = squads
            .into_iter()
            .map(|squad| {
                let qbs = summaries
                    .iter()
                    .filter(|qb| qb.squad_id == Some(squad.id))
                    .map(|qb| QbPoints {
                        qb_id: qb.id,
                        name: qb.name.clone(),
                        nfl_team: qb.nfl_team.clone(),
                        total_points: qb.total_points,
                    })
                    .collect();
                SquadScoresheet { squad, qbs }
            })
            .collect();

        Ok(rank_squads(sheets, payout))
    }

    pub async fn worst_qb(&self, season: i32) -> Result<Option<QuarterbackSummary>, LeagueError> {
        let summaries = db::quarterbacks::list_summaries(&self.pool, season).await?;
        Ok(worst_rostered_qb(&summaries))
    }
}
