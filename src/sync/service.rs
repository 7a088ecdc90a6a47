// src/sync/service.rs
use sqlx::PgPool;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

use crate::db;
use crate::errors::LeagueError;
use crate::models::stats::{BonusType, PlayoffRound, StatLine};
use crate::models::sync::SyncSummary;
use crate::scoring;
use crate::sync::provider::NflDataProvider;
use crate::sync::reconcile::{
    plan_award_credits, plan_playoff_credits, plan_season_stat_rows, plan_win_credits, RosterIndex,
};

/// Applies reconciler plans to the store. Each record commits on its
/// own, so a provider failure mid-sync preserves the records already
/// written; the idempotent planner makes the re-run safe.
pub struct SyncService {
    pool: PgPool,
    provider: Arc<dyn NflDataProvider>,
}

impl SyncService {
    pub fn new(pool: PgPool, provider: Arc<dyn NflDataProvider>) -> Self {
        Self { pool, provider }
    }

    async fn roster_index(&self, season: i32) -> Result<RosterIndex, LeagueError> {
        let index = db::quarterbacks::name_index(&self.pool, season).await?;
        Ok(RosterIndex::new(index))
    }

    /// Sync season aggregate stat lines, stored as week 0. Existing
    /// lines keep their win flags; raw categories are overwritten and
    /// points recomputed.
    pub async fn sync_season_stats(&self, season: i32) -> Result<SyncSummary, LeagueError> {
        let rows = self.provider.fetch_season_stats(season).await?;
        let roster = self.roster_index(season).await?;
        let upserts = plan_season_stat_rows(&rows, &roster);

        let mut summary = SyncSummary::new(season);
        for (qb_id, line) in upserts {
            match db::stat_records::get_weekly(&self.pool, qb_id, season, 0).await? {
                Some(existing) => {
                    let merged = StatLine {
                        game_won: existing.game_won,
                        prime_time_win: existing.prime_time_win,
                        ..line
                    };
                    let points = scoring::score_weekly(&merged);
                    db::stat_records::update_stat_categories(&self.pool, existing.id, &merged, points)
                        .await?;
                    summary.updated += 1;
                }
                None => {
                    let points = scoring::score_weekly(&line);
                    db::stat_records::upsert_weekly(&self.pool, qb_id, season, 0, &line, points)
                        .await?;
                    summary.created += 1;
                }
            }
        }

        tracing::info!(
            "Season stat sync for {}: {} created, {} updated",
            season,
            summary.created,
            summary.updated
        );
        Ok(summary)
    }

    /// Credit regular-season wins to starting quarterbacks. Re-running
    /// on already-synced games is a counted no-op.
    pub async fn sync_wins(&self, season: i32) -> Result<SyncSummary, LeagueError> {
        let games = self.provider.fetch_schedule(season).await?;
        let roster = self.roster_index(season).await?;
        let credited = db::stat_records::win_flags(&self.pool, season).await?;
        let plan = plan_win_credits(&games, &roster, &credited);

        let mut summary = SyncSummary::new(season);
        summary.skipped = plan.already_credited;
        summary.unresolved = plan.unresolved;

        for credit in plan.credits {
            match db::stat_records::get_weekly(&self.pool, credit.qb_id, season, credit.week).await? {
                Some(existing) => {
                    let line = StatLine {
                        game_won: true,
                        prime_time_win: credit.prime_time,
                        ..existing.line()
                    };
                    let points = scoring::score_weekly(&line);
                    db::stat_records::mark_win(&self.pool, existing.id, credit.prime_time, points)
                        .await?;
                    summary.updated += 1;
                }
                None => {
                    let line = StatLine {
                        game_won: true,
                        prime_time_win: credit.prime_time,
                        ..StatLine::default()
                    };
                    let points = scoring::score_weekly(&line);
                    db::stat_records::upsert_weekly(
                        &self.pool,
                        credit.qb_id,
                        season,
                        credit.week,
                        &line,
                        points,
                    )
                    .await?;
                    summary.created += 1;
                }
            }
        }

        tracing::info!(
            "Win sync for {}: {} created, {} updated, {} skipped, {} unresolved",
            season,
            summary.created,
            summary.updated,
            summary.skipped,
            summary.unresolved.len()
        );
        Ok(summary)
    }

    /// Record cumulative playoff-round appearances, once per round per
    /// quarterback, upgrading the Super Bowl appearance on a win.
    pub async fn sync_playoffs(&self, season: i32) -> Result<SyncSummary, LeagueError> {
        let games = self.provider.fetch_schedule(season).await?;
        let roster = self.roster_index(season).await?;
        let existing = db::stat_records::playoff_flags(&self.pool, season).await?;
        let plan = plan_playoff_credits(&games, &roster, &existing);

        let mut summary = SyncSummary::new(season);
        summary.skipped = plan.already_credited;
        summary.unresolved = plan.unresolved;

        for credit in plan.credits {
            let points = scoring::playoff_points(credit.round, credit.won_super_bowl);
            db::stat_records::insert_playoff(
                &self.pool,
                credit.qb_id,
                season,
                credit.round,
                credit.won_super_bowl,
                points,
            )
            .await?;
            summary.created += 1;
        }

        for qb_id in plan.upgrades {
            if let Some(appearance) =
                db::stat_records::get_playoff(&self.pool, qb_id, season, PlayoffRound::SuperBowl)
                    .await?
            {
                let points = scoring::playoff_points(PlayoffRound::SuperBowl, true);
                db::stat_records::upgrade_super_bowl_win(&self.pool, appearance.id, points).await?;
                summary.updated += 1;
            }
        }

        tracing::info!(
            "Playoff sync for {}: {} created, {} updated, {} skipped",
            season,
            summary.created,
            summary.updated,
            summary.skipped
        );
        Ok(summary)
    }

    /// Record Player of the Week / Month bonuses from the provider's
    /// award feed, at most one of each type per quarterback per season.
    pub async fn seed_awards(&self, season: i32) -> Result<SyncSummary, LeagueError> {
        let rows = self.provider.fetch_season_awards(season).await?;
        let roster = self.roster_index(season).await?;
        let plan = plan_award_credits(&rows, &roster);

        let mut summary = SyncSummary::new(season);
        summary.unresolved = plan.unresolved;

        let mut seen: HashSet<(Uuid, BonusType)> = HashSet::new();
        for (qb_id, bonus_type) in plan.credits {
            if !seen.insert((qb_id, bonus_type)) {
                summary.skipped += 1;
                continue;
            }
            if db::stat_records::bonus_exists(&self.pool, qb_id, season, bonus_type).await? {
                summary.skipped += 1;
                continue;
            }
            let points = scoring::bonus_points(bonus_type);
            db::stat_records::insert_bonus(&self.pool, qb_id, season, bonus_type, points).await?;
            summary.created += 1;
        }

        tracing::info!(
            "Award seed for {}: {} created, {} skipped",
            season,
            summary.created,
            summary.skipped
        );
        Ok(summary)
    }
}
