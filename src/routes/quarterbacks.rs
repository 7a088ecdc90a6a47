// src/routes/quarterbacks.rs
use actix_web::{get, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::settings::LeagueSettings;
use crate::errors::LeagueError;
use crate::handlers::{quarterback_handler, SeasonQuery};

/// Get all quarterbacks for a season with total points
#[get("/quarterbacks")]
async fn get_all_quarterbacks(
    query: web::Query<SeasonQuery>,
    pool: web::Data<PgPool>,
    league: web::Data<LeagueSettings>,
) -> Result<HttpResponse, LeagueError> {
    quarterback_handler::get_all_quarterbacks(query, pool, league).await
}

/// Get the full scoring breakdown for a quarterback
#[get("/quarterbacks/{qb_id}")]
async fn get_quarterback_details(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    let qb_id = path.into_inner();
    quarterback_handler::get_quarterback_details(qb_id, pool).await
}
