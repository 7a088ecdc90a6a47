// src/db/stat_records.rs
//
// Raw record store for weekly stat lines, season bonuses and playoff
// appearances. Uniqueness is enforced by the database constraints:
//   weekly_stats        (qb_id, season, week)
//   season_bonuses      (qb_id, season, bonus_type)
//   playoff_appearances (qb_id, season, round)
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::stats::{
    BonusType, PlayoffAppearance, PlayoffRound, SeasonBonus, StatLine, WeeklyStat,
};

pub async fn list_weekly(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
) -> Result<Vec<WeeklyStat>, sqlx::Error> {
    sqlx::query_as::<_, WeeklyStat>(
        "SELECT * FROM weekly_stats WHERE qb_id = $1 AND season = $2 ORDER BY week",
    )
    .bind(qb_id)
    .bind(season)
    .fetch_all(pool)
    .await
}

pub async fn get_weekly(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
    week: i32,
) -> Result<Option<WeeklyStat>, sqlx::Error> {
    sqlx::query_as::<_, WeeklyStat>(
        "SELECT * FROM weekly_stats WHERE qb_id = $1 AND season = $2 AND week = $3",
    )
    .bind(qb_id)
    .bind(season)
    .bind(week)
    .fetch_optional(pool)
    .await
}

/// Create or overwrite the full stat line for (qb, season, week).
pub async fn upsert_weekly(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
    week: i32,
    line: &StatLine,
    points: f64,
) -> Result<WeeklyStat, sqlx::Error> {
    sqlx::query_as::<_, WeeklyStat>(
        r#"
        INSERT INTO weekly_stats (
            id, qb_id, season, week,
            passing_yards, rushing_yards, passing_tds, rushing_tds, receiving_tds,
            interceptions, fumbles, game_won, prime_time_win, points
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
        ON CONFLICT (qb_id, season, week) DO UPDATE SET
            passing_yards = EXCLUDED.passing_yards,
            rushing_yards = EXCLUDED.rushing_yards,
            passing_tds = EXCLUDED.passing_tds,
            rushing_tds = EXCLUDED.rushing_tds,
            receiving_tds = EXCLUDED.receiving_tds,
            interceptions = EXCLUDED.interceptions,
            fumbles = EXCLUDED.fumbles,
            game_won = EXCLUDED.game_won,
            prime_time_win = EXCLUDED.prime_time_win,
            points = EXCLUDED.points
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(qb_id)
    .bind(season)
    .bind(week)
    .bind(line.passing_yards)
    .bind(line.rushing_yards)
    .bind(line.passing_tds)
    .bind(line.rushing_tds)
    .bind(line.receiving_tds)
    .bind(line.interceptions)
    .bind(line.fumbles)
    .bind(line.game_won)
    .bind(line.prime_time_win)
    .bind(points)
    .fetch_one(pool)
    .await
}

/// Update the raw stat categories of an existing line, leaving the win
/// flags untouched (the wins sync owns those).
pub async fn update_stat_categories(
    pool: &PgPool,
    id: Uuid,
    line: &StatLine,
    points: f64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE weekly_stats SET
            passing_yards = $2,
            rushing_yards = $3,
            passing_tds = $4,
            rushing_tds = $5,
            receiving_tds = $6,
            interceptions = $7,
            fumbles = $8,
            points = $9
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(line.passing_yards)
    .bind(line.rushing_yards)
    .bind(line.passing_tds)
    .bind(line.rushing_tds)
    .bind(line.receiving_tds)
    .bind(line.interceptions)
    .bind(line.fumbles)
    .bind(points)
    .execute(pool)
    .await?;
    Ok(())
}

/// Credit a win on an existing stat line.
pub async fn mark_win(
    pool: &PgPool,
    id: Uuid,
    prime_time: bool,
    points: f64,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE weekly_stats SET game_won = TRUE, prime_time_win = $2, points = $3 WHERE id = $1",
    )
    .bind(id)
    .bind(prime_time)
    .bind(points)
    .execute(pool)
    .await?;
    Ok(())
}

/// (qb_id, week) -> game_won for every stat line of the season. The
/// wins reconciler uses this as its already-credited set.
pub async fn win_flags(
    pool: &PgPool,
    season: i32,
) -> Result<HashMap<(Uuid, i32), bool>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (Uuid, i32, bool)>(
        "SELECT qb_id, week, game_won FROM weekly_stats WHERE season = $1",
    )
    .bind(season)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(qb_id, week, won)| ((qb_id, week), won))
        .collect())
}

pub async fn list_bonuses(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
) -> Result<Vec<SeasonBonus>, sqlx::Error> {
    sqlx::query_as::<_, SeasonBonus>(
        "SELECT * FROM season_bonuses WHERE qb_id = $1 AND season = $2 ORDER BY bonus_type",
    )
    .bind(qb_id)
    .bind(season)
    .fetch_all(pool)
    .await
}

pub async fn bonus_exists(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
    bonus_type: BonusType,
) -> Result<bool, sqlx::Error> {
    let existing = sqlx::query_as::<_, (Uuid,)>(
        "SELECT id FROM season_bonuses WHERE qb_id = $1 AND season = $2 AND bonus_type = $3",
    )
    .bind(qb_id)
    .bind(season)
    .bind(bonus_type)
    .fetch_optional(pool)
    .await?;
    Ok(existing.is_some())
}

pub async fn insert_bonus(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
    bonus_type: BonusType,
    points: f64,
) -> Result<SeasonBonus, sqlx::Error> {
    sqlx::query_as::<_, SeasonBonus>(
        r#"
        INSERT INTO season_bonuses (id, qb_id, season, bonus_type, points)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(qb_id)
    .bind(season)
    .bind(bonus_type)
    .bind(points)
    .fetch_one(pool)
    .await
}

pub async fn list_playoffs(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
) -> Result<Vec<PlayoffAppearance>, sqlx::Error> {
    sqlx::query_as::<_, PlayoffAppearance>(
        "SELECT * FROM playoff_appearances WHERE qb_id = $1 AND season = $2 ORDER BY points",
    )
    .bind(qb_id)
    .bind(season)
    .fetch_all(pool)
    .await
}

pub async fn get_playoff(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
    round: PlayoffRound,
) -> Result<Option<PlayoffAppearance>, sqlx::Error> {
    sqlx::query_as::<_, PlayoffAppearance>(
        "SELECT * FROM playoff_appearances WHERE qb_id = $1 AND season = $2 AND round = $3",
    )
    .bind(qb_id)
    .bind(season)
    .bind(round)
    .fetch_optional(pool)
    .await
}

pub async fn insert_playoff(
    pool: &PgPool,
    qb_id: Uuid,
    season: i32,
    round: PlayoffRound,
    won_super_bowl: bool,
    points: f64,
) -> Result<PlayoffAppearance, sqlx::Error> {
    sqlx::query_as::<_, PlayoffAppearance>(
        r#"
        INSERT INTO playoff_appearances (id, qb_id, season, round, won_super_bowl, points)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (qb_id, season, round) DO UPDATE SET
            won_super_bowl = EXCLUDED.won_super_bowl,
            points = EXCLUDED.points
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(qb_id)
    .bind(season)
    .bind(round)
    .bind(won_super_bowl)
    .bind(points)
    .fetch_one(pool)
    .await
}

/// Upgrade an existing Super Bowl appearance to a win.
pub async fn upgrade_super_bowl_win(
    pool: &PgPool,
    id: Uuid,
    points: f64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE playoff_appearances SET won_super_bowl = TRUE, points = $2 WHERE id = $1")
        .bind(id)
        .bind(points)
        .execute(pool)
        .await?;
    Ok(())
}

/// (qb_id, round) -> won_super_bowl for the season, the playoff
/// reconciler's already-credited set.
pub async fn playoff_flags(
    pool: &PgPool,
    season: i32,
) -> Result<HashMap<(Uuid, PlayoffRound), bool>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (Uuid, PlayoffRound, bool)>(
        "SELECT qb_id, round, won_super_bowl FROM playoff_appearances WHERE season = $1",
    )
    .bind(season)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(qb_id, round, won)| ((qb_id, round), won))
        .collect())
}
