use actix_web::{web, HttpResponse};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::LeagueError;
use crate::models::stats::{
    validate_season, BonusType, PlayoffAppearanceRequest, PlayoffRound, SeasonBonusRequest,
    WeeklyStatRequest,
};
use crate::scoring;

async fn require_quarterback(
    pool: &PgPool,
    qb_id: Uuid,
) -> Result<crate::models::quarterback::Quarterback, LeagueError> {
    db::quarterbacks::get(pool, qb_id)
        .await?
        .ok_or_else(|| LeagueError::NotFound("quarterback".into()))
}

/// Create or overwrite a weekly stat line. Points are recomputed from
/// the league rules on every write.
pub async fn add_weekly_stat(
    request: web::Json<WeeklyStatRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    request.validate()?;
    let qb = require_quarterback(pool.get_ref(), request.qb_id).await?;

    let line = request.line();
    let points = scoring::score_weekly(&line);
    let stat = db::stat_records::upsert_weekly(
        pool.get_ref(),
        request.qb_id,
        request.season,
        request.week,
        &line,
        points,
    )
    .await?;

    tracing::info!(
        "Weekly stat saved for {} week {}: {} points",
        qb.name,
        stat.week,
        stat.points
    );
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Weekly stats saved",
        "data": {
            "qb_name": qb.name,
            "week": stat.week,
            "points": stat.points,
        }
    })))
}

/// Record a season bonus. At most one of each type per quarterback per
/// season; unknown types are rejected before any mutation.
pub async fn add_season_bonus(
    request: web::Json<SeasonBonusRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    validate_season(request.season)?;
    let bonus_type = BonusType::try_from(request.bonus_type.as_str())?;
    let qb = require_quarterback(pool.get_ref(), request.qb_id).await?;

    if db::stat_records::bonus_exists(pool.get_ref(), request.qb_id, request.season, bonus_type)
        .await?
    {
        return Err(LeagueError::Validation(format!(
            "{} is already recorded for this quarterback",
            bonus_type
        )));
    }

    let points = scoring::bonus_points(bonus_type);
    let bonus =
        db::stat_records::insert_bonus(pool.get_ref(), request.qb_id, request.season, bonus_type, points)
            .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Bonus added",
        "data": {
            "qb_name": qb.name,
            "bonus_type": bonus.bonus_type,
            "points": bonus.points,
        }
    })))
}

/// Create or overwrite a playoff appearance for a round. Rounds are
/// cumulative, one record per round reached.
pub async fn add_playoff_appearance(
    request: web::Json<PlayoffAppearanceRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, LeagueError> {
    validate_season(request.season)?;
    let round = PlayoffRound::try_from(request.round.as_str())?;
    if request.won_super_bowl && round != PlayoffRound::SuperBowl {
        return Err(LeagueError::Validation(
            "won_super_bowl only applies to the SUPER_BOWL round".into(),
        ));
    }
    let qb = require_quarterback(pool.get_ref(), request.qb_id).await?;

    let points = scoring::playoff_points(round, request.won_super_bowl);
    let appearance = db::stat_records::insert_playoff(
        pool.get_ref(),
        request.qb_id,
        request.season,
        round,
        request.won_super_bowl,
        points,
    )
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Playoff appearance saved",
        "data": {
            "qb_name": qb.name,
            "round": appearance.round,
            "points": appearance.points,
        }
    })))
}
