// src/routes/standings.rs
use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;

use crate::config::settings::LeagueSettings;
use crate::errors::LeagueError;
use crate::handlers::{standings_handler, SeasonQuery};

/// Get league standings for a season
#[get("/standings")]
async fn get_standings(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    standings_handler::get_league_standings(query, pool, league).await
}

/// Get the worst quarterback of the season
#[get("/standings/worst-qb")]
async fn get_worst_qb(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    standings_handler::get_worst_qb(query, pool, league).await
}
