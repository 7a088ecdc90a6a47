// src/routes/squads.rs
use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::LeagueSettings;
use crate::errors::LeagueError;
use crate::handlers::{squad_handler, SeasonQuery};

/// Get all squads for a season
#[get("/squads")]
async fn get_all_squads(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    squad_handler::get_all_squads(query, pool, league).await
}

/// Get a squad's roster with per-QB ranks
#[get("/squads/{squad_id}/roster")]
async fn get_squad_roster(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    let squad_id = path.into_inner();
    squad_handler::get_squad_roster(squad_id, pool).await
}
