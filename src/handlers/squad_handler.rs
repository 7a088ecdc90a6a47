use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::LeagueSettings;
use crate::db;
use crate::errors::LeagueError;
use crate::handlers::SeasonQuery;
use crate::league::standings::{sort_roster, squad_total, QbPoints};
use crate::models::squad::{RosterEntry, SquadRosterResponse, SquadSummary, TOP_QB_COUNT};
use crate::models::stats::validate_season;

fn squad_qb_points(
    summaries: &[crate::models::quarterback::QuarterbackSummary],
    squad_id: Uuid,
) -> Vec<QbPoints> {
    summaries
        .iter()
        .filter(|qb| qb.squad_id == Some(squad_id))
        .map(|qb| QbPoints {
            qb_id: qb.id,
            name: qb.name.clone(),
            nfl_team: qb.nfl_team.clone(),
            total_points: qb.total_points,
        })
        .collect()
}

/// All squads of a season with their standings totals.
pub async fn get_all_squads(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    let season = query.season_or(league.default_season);
    validate_season(season)?;

    let squads = db::squads::list_by_season(pool.get_ref(), season).await?;
    let summaries = db::quarterbacks::list_summaries(pool.get_ref(), season).await?;

    let result: Vec<SquadSummary> = squads
        .into_iter()
        .map(|squad| {
            let mut qbs = squad_qb_points(&summaries, squad.id);
            sort_roster(&mut qbs);
            SquadSummary {
                id: squad.id,
                name: squad.name,
                owner: squad.owner,
                season: squad.season,
                total_points: squad_total(&qbs),
                qb_count: qbs.len(),
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "season": season,
            "squads": result,
        }
    })))
}

/// A squad's full roster with per-quarterback rank and the top-5 flag.
pub async fn get_squad_roster(
    squad_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    let squad = db::squads::get(pool.get_ref(), squad_id)
        .await?
        .ok_or_else(|| LeagueError::NotFound("squad".into()))?;

    let summaries = db::quarterbacks::list_summaries(pool.get_ref(), squad.season).await?;
    let mut qbs = squad_qb_points(&summaries, squad.id);
    sort_roster(&mut qbs);

    let roster: Vec<RosterEntry> = qbs
        .into_iter()
        .enumerate()
        .map(|(i, qb)| RosterEntry {
            qb_id: qb.qb_id,
            name: qb.name,
            nfl_team: qb.nfl_team,
            total_points: qb.total_points,
            rank: i + 1,
            is_top_5: i < TOP_QB_COUNT,
        })
        .collect();

    let response = SquadRosterResponse {
        squad_id: squad.id,
        squad_name: squad.name,
        owner: squad.owner,
        season: squad.season,
        roster,
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": response,
    })))
}
