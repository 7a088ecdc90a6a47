use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;

use crate::config::settings::LeagueSettings;
use crate::errors::LeagueError;
use crate::handlers::SeasonQuery;
use crate::league::payout::PayoutTable;
use crate::league::standings::StandingsService;
use crate::models::stats::validate_season;

/// League standings: squads ranked by the sum of their top 5
/// quarterbacks, with projected payouts per rank.
pub async fn get_league_standings(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    let season = query.season_or(league.default_season);
    validate_season(season)?;

    let service = StandingsService::new(pool.get_ref().clone());
    let payout = PayoutTable::new(league.dues);
    let standings = service.build_standings(season, &payout).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "season": season,
            "standings": standings,
        }
    })))
}

/// The worst rostered quarterback with positive points, for the league
/// naming tradition. Null when nobody qualifies yet.
pub async fn get_worst_qb(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    let season = query.season_or(league.default_season);
    validate_season(season)?;

    let service = StandingsService::new(pool.get_ref().clone());
    let worst_qb = service.worst_qb(season).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "season": season,
            "worst_qb": worst_qb,
        }
    })))
}
