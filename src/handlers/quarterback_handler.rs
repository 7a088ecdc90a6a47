use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::LeagueSettings;
use crate::db;
use crate::errors::LeagueError;
use crate::handlers::SeasonQuery;
use crate::models::quarterback::{
    AggregateStats, BonusBreakdown, PlayoffBreakdown, QuarterbackDetail, WeeklyStatsBreakdown,
};
use crate::models::stats::validate_season;
use crate::scoring;

/// All quarterbacks of a season with their totals, points descending.
/// Free agents are included.
pub async fn get_all_quarterbacks(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    let season = query.season_or(league.default_season);
    validate_season(season)?;

    let mut summaries = db::quarterbacks::list_summaries(pool.get_ref(), season).await?;
    summaries.sort_by(|a, b| {
        b.total_points
            .partial_cmp(&a.total_points)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "season": season,
            "quarterbacks": summaries,
        }
    })))
}

/// Full scoring breakdown for one quarterback: weekly lines, bonuses,
/// playoff appearances and raw stat aggregates.
pub async fn get_quarterback_details(
    qb_id: Uuid,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    let qb = db::quarterbacks::get(pool.get_ref(), qb_id)
        .await?
        .ok_or_else(|| LeagueError::NotFound("quarterback".into()))?;

    let squad_name = match qb.squad_id {
        Some(squad_id) => db::squads::get(pool.get_ref(), squad_id)
            .await?
            .map(|s| s.name),
        None => None,
    };

    let weekly = db::stat_records::list_weekly(pool.get_ref(), qb.id, qb.season).await?;
    let bonuses = db::stat_records::list_bonuses(pool.get_ref(), qb.id, qb.season).await?;
    let playoffs = db::stat_records::list_playoffs(pool.get_ref(), qb.id, qb.season).await?;

    let breakdown = scoring::score_quarterback(&weekly, &bonuses, &playoffs);

    let mut aggregate_stats = AggregateStats::default();
    for stat in &weekly {
        aggregate_stats.accumulate(stat);
    }

    let detail = QuarterbackDetail {
        qb_id: qb.id,
        name: qb.name,
        nfl_team: qb.nfl_team,
        squad_name,
        season: qb.season,
        total_points: breakdown.grand_total,
        weekly_stats: WeeklyStatsBreakdown {
            stats: weekly,
            total: breakdown.weekly_total,
        },
        bonuses: BonusBreakdown {
            awards: bonuses,
            total: breakdown.bonus_total,
        },
        playoffs: PlayoffBreakdown {
            appearances: playoffs,
            total: breakdown.playoff_total,
        },
        aggregate_stats,
    };

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": detail,
    })))
}
