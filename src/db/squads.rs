// src/db/squads.rs
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::squad::Squad;

pub async fn list_by_season(pool: &PgPool, season: i32) -> Result<Vec<Squad>, sqlx::Error> {
    sqlx::query_as::<_, Squad>(
        "SELECT id, name, owner, season FROM squads WHERE season = $1 ORDER BY id",
    )
    .bind(season)
    .fetch_all(pool)
    .await
}

pub async fn get(pool: &PgPool, squad_id: Uuid) -> Result<Option<Squad>, sqlx::Error> {
    sqlx::query_as::<_, Squad>("SELECT id, name, owner, season FROM squads WHERE id = $1")
        .bind(squad_id)
        .fetch_optional(pool)
        .await
}
