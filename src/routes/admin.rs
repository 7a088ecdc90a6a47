// src/routes/admin.rs
use actix_web::{post, web, HttpResponse};
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::settings::{AdminSettings, LeagueSettings};
use crate::errors::LeagueError;
use crate::handlers::admin::{auth_handler, records_handler, sync_handler};
use crate::handlers::SeasonQuery;
use crate::models::stats::{PlayoffAppearanceRequest, SeasonBonusRequest, WeeklyStatRequest};
use crate::sync::NflDataProvider;

/// Verify the admin password and issue a short-lived token
#[post("/verify-password")]
async fn verify_password(
    request: web::Json<auth_handler::PasswordVerifyRequest>,
    settings: web::Data<AdminSettings>,
) -> Result<HttpResponse, LeagueError> {
    auth_handler::verify_password(request, settings).await
}

/// Create or overwrite a weekly stat line
#[post("/weekly-stats")]
async fn add_weekly_stat(
    request: web::Json<WeeklyStatRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    records_handler::add_weekly_stat(request, pool).await
}

/// Record a season bonus
#[post("/bonuses")]
async fn add_season_bonus(
    request: web::Json<SeasonBonusRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    records_handler::add_season_bonus(request, pool).await
}

/// Record a playoff appearance
#[post("/playoffs")]
async fn add_playoff_appearance(
    request: web::Json<PlayoffAppearanceRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    records_handler::add_playoff_appearance(request, pool).await
}

/// Sync season aggregate stats from the NFL data provider
#[post("/sync-stats")]
async fn sync_stats(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    provider: web::Data<Arc<dyn NflDataProvider>>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    sync_handler::sync_stats(query, pool, provider, league).await
}

/// Sync regular-season win credits
#[post("/sync-wins")]
async fn sync_wins(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    provider: web::Data<Arc<dyn NflDataProvider>>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    sync_handler::sync_wins(query, pool, provider, league).await
}

/// Sync playoff-round appearances
#[post("/sync-playoffs")]
async fn sync_playoffs(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    provider: web::Data<Arc<dyn NflDataProvider>>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    sync_handler::sync_playoffs(query, pool, provider, league).await
}

/// Seed Player of the Week / Month award bonuses
#[post("/seed-awards")]
async fn seed_awards(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    provider: web::Data<Arc<dyn NflDataProvider>>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    sync_handler::seed_awards(query, pool, provider, league).await
}
