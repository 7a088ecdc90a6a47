use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::settings::LeagueSettings;
use crate::errors::LeagueError;
use crate::handlers::SeasonQuery;
use crate::models::common::ApiResponse;
use crate::models::stats::validate_season;
use crate::models::sync::SyncSummary;
use crate::sync::{NflDataProvider, SyncService};

fn sync_service(
    pool: &web::Data<PgPool>,
    provider: &web::Data<Arc<dyn NflDataProvider>>,
) -> SyncService {
    SyncService::new(pool.get_ref().clone(), provider.get_ref().clone())
}

fn summary_response(message: &str, summary: SyncSummary) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(message, summary))
}

/// Pull season aggregate stats from the provider into week-0 lines.
pub async fn sync_stats(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    provider: web::Data<Arc<dyn NflDataProvider>>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    let season = query.season_or(league.default_season);
    validate_season(season)?;
    let summary = sync_service(&pool, &provider).sync_season_stats(season).await?;
    Ok(summary_response("Season stats synced", summary))
}

/// Credit regular-season wins to starting quarterbacks.
pub async fn sync_wins(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    provider: web::Data<Arc<dyn NflDataProvider>>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    let season = query.season_or(league.default_season);
    validate_season(season)?;
    let summary = sync_service(&pool, &provider).sync_wins(season).await?;
    Ok(summary_response("Wins synced", summary))
}

/// Record playoff-round appearances.
pub async fn sync_playoffs(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    provider: web::Data<Arc<dyn NflDataProvider>>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    let season = query.season_or(league.default_season);
    validate_season(season)?;
    let summary = sync_service(&pool, &provider).sync_playoffs(season).await?;
    Ok(summary_response("Playoff appearances synced", summary))
}

/// Seed Player of the Week / Month bonuses from the award feed.
pub async fn seed_awards(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    provider: web::Data<Arc<dyn NflDataProvider>>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    let season = query.season_or(league.default_season);
    validate_season(season)?;
    let summary = sync_service(&pool, &provider).seed_awards(season).await?;
    Ok(summary_response("Awards seeded", summary))
}
