// src/db/quarterbacks.rs
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::quarterback::{Quarterback, QuarterbackSummary};
use crate::scoring::round2;

pub async fn get(pool: &PgPool, qb_id: Uuid) -> Result<Option<Quarterback>, sqlx::Error> {
    sqlx::query_as::<_, Quarterback>(
        "SELECT id, name, nfl_team, squad_id, season FROM quarterbacks WHERE id = $1",
    )
    .bind(qb_id)
    .fetch_optional(pool)
    .await
}

/// All quarterbacks of a season with their grand totals, free agents
/// included. Totals come from the stored per-record points, summed per
/// category in one snapshot query.
pub async fn list_summaries(
    pool: &PgPool,
    season: i32,
) -> Result<Vec<QuarterbackSummary>, sqlx::Error> {
    let mut summaries = sqlx::query_as::<_, QuarterbackSummary>(
        r#"
        SELECT
            q.id,
            q.name,
            q.nfl_team,
            q.squad_id,
            s.name AS squad_name,
            COALESCE(w.pts, 0) + COALESCE(b.pts, 0) + COALESCE(p.pts, 0) AS total_points
        FROM quarterbacks q
        LEFT JOIN squads s ON q.squad_id = s.id
        LEFT JOIN (
            SELECT qb_id, SUM(points) AS pts FROM weekly_stats
            WHERE season = $1 GROUP BY qb_id
        ) w ON w.qb_id = q.id
        LEFT JOIN (
            SELECT qb_id, SUM(points) AS pts FROM season_bonuses
            WHERE season = $1 GROUP BY qb_id
        ) b ON b.qb_id = q.id
        LEFT JOIN (
            SELECT qb_id, SUM(points) AS pts FROM playoff_appearances
            WHERE season = $1 GROUP BY qb_id
        ) p ON p.qb_id = q.id
        WHERE q.season = $1
        "#,
    )
    .bind(season)
    .fetch_all(pool)
    .await?;

    for summary in &mut summaries {
        summary.total_points = round2(summary.total_points);
    }
    Ok(summaries)
}

/// Name -> id index of the season's rostered quarterbacks, used by the
/// sync reconciler to resolve provider rows.
pub async fn name_index(pool: &PgPool, season: i32) -> Result<HashMap<String, Uuid>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (String, Uuid)>(
        "SELECT name, id FROM quarterbacks WHERE season = $1",
    )
    .bind(season)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}
