// src/sync/reconcile.rs
//
// Pure planning layer of the sync reconciler: provider rows in, planned
// credits out. Nothing here touches the database, so idempotence is a
// property of the inputs: a key that is already in the credited set is
// never planned again.
use std::collections::HashMap;
use uuid::Uuid;

use crate::models::stats::{BonusType, PlayoffRound, StatLine};
use crate::models::sync::{ProviderAwardRow, ProviderGame, ProviderSeasonStatRow};

/// Name -> id index of the season's quarterbacks.
#[derive(Debug, Default)]
pub struct RosterIndex {
    by_name: HashMap<String, Uuid>,
}

impl RosterIndex {
    pub fn new(by_name: HashMap<String, Uuid>) -> Self {
        Self { by_name }
    }

    fn resolve(&self, name: Option<&str>) -> Option<Uuid> {
        name.and_then(|n| self.by_name.get(n).copied())
    }
}

/// A regular-season win to credit to a starting quarterback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinCredit {
    pub qb_id: Uuid,
    pub week: i32,
    pub prime_time: bool,
}

#[derive(Debug, Default)]
pub struct WinPlan {
    pub credits: Vec<WinCredit>,
    pub already_credited: u32,
    pub unresolved: Vec<String>,
}

/// Plan win credits from completed regular-season games. Only the
/// winning team's starting quarterback is credited; ties credit nobody.
/// A game whose winning quarterback cannot be resolved is reported and
/// skipped, never fatal. `credited` holds (qb, week) -> game_won for
/// stat lines that already exist.
pub fn plan_win_credits(
    games: &[ProviderGame],
    roster: &RosterIndex,
    credited: &HashMap<(Uuid, i32), bool>,
) -> WinPlan {
    let mut plan = WinPlan::default();

    for game in games {
        if game.game_type != "REG" || !game.is_completed() {
            continue;
        }
        let (home, away) = match (game.home_score, game.away_score) {
            (Some(h), Some(a)) => (h, a),
            _ => continue,
        };
        let (winner_name, winner_team) = if home > away {
            (game.home_qb_name.as_deref(), game.home_team.as_str())
        } else if away > home {
            (game.away_qb_name.as_deref(), game.away_team.as_str())
        } else {
            // Tie game, no win to credit
            continue;
        };

        if winner_name.is_none() {
            plan.unresolved.push(format!(
                "week {}: no starting QB recorded for {}",
                game.week, winner_team
            ));
            continue;
        }

        let qb_id = match roster.resolve(winner_name) {
            Some(id) => id,
            // Winner's QB is not in our league, nothing to credit
            None => continue,
        };

        if credited.get(&(qb_id, game.week)).copied().unwrap_or(false) {
            plan.already_credited += 1;
            continue;
        }

        plan.credits.push(WinCredit {
            qb_id,
            week: game.week,
            prime_time: game.is_prime_time(),
        });
    }

    plan
}

/// A playoff-round appearance to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayoffCredit {
    pub qb_id: Uuid,
    pub round: PlayoffRound,
    pub won_super_bowl: bool,
}

#[derive(Debug, Default)]
pub struct PlayoffPlan {
    pub credits: Vec<PlayoffCredit>,
    /// Existing Super Bowl appearances that must be upgraded to a win.
    pub upgrades: Vec<Uuid>,
    pub already_credited: u32,
    pub unresolved: Vec<String>,
}

fn playoff_round_for(game_type: &str) -> Option<PlayoffRound> {
    match game_type {
        "WC" => Some(PlayoffRound::WildCard),
        "DIV" => Some(PlayoffRound::Divisional),
        "CON" => Some(PlayoffRound::ConfChampionship),
        "SB" => Some(PlayoffRound::SuperBowl),
        _ => None,
    }
}

/// Plan playoff-round credits from completed playoff games. Both
/// starting quarterbacks appeared in the round, so both are credited,
/// each at most once per round. The Super Bowl winner's appearance
/// carries the win flag; an already-recorded appearance is upgraded
/// rather than duplicated.
pub fn plan_playoff_credits(
    games: &[ProviderGame],
    roster: &RosterIndex,
    existing: &HashMap<(Uuid, PlayoffRound), bool>,
) -> PlayoffPlan {
    let mut plan = PlayoffPlan::default();

    for game in games {
        let round = match playoff_round_for(&game.game_type) {
            Some(round) if game.is_completed() => round,
            _ => continue,
        };
        let (home, away) = match (game.home_score, game.away_score) {
            (Some(h), Some(a)) => (h, a),
            _ => continue,
        };
        let is_super_bowl = round == PlayoffRound::SuperBowl;
        let sides = [
            (
                game.home_qb_name.as_deref(),
                game.home_team.as_str(),
                is_super_bowl && home > away,
            ),
            (
                game.away_qb_name.as_deref(),
                game.away_team.as_str(),
                is_super_bowl && away > home,
            ),
        ];

        for (qb_name, team, won_super_bowl) in sides {
            if qb_name.is_none() {
                plan.unresolved.push(format!(
                    "{}: no starting QB recorded for {}",
                    round, team
                ));
                continue;
            }
            let qb_id = match roster.resolve(qb_name) {
                Some(id) => id,
                None => continue,
            };

            match existing.get(&(qb_id, round)) {
                Some(&already_won) => {
                    if won_super_bowl && !already_won {
                        plan.upgrades.push(qb_id);
                    } else {
                        plan.already_credited += 1;
                    }
                }
                None => plan.credits.push(PlayoffCredit {
                    qb_id,
                    round,
                    won_super_bowl,
                }),
            }
        }
    }

    plan
}

/// Season aggregate rows matched to rostered quarterbacks. The line
/// carries raw categories only; win flags belong to the wins sync.
pub fn plan_season_stat_rows(
    rows: &[ProviderSeasonStatRow],
    roster: &RosterIndex,
) -> Vec<(Uuid, StatLine)> {
    rows.iter()
        .filter(|row| row.position == "QB")
        .filter_map(|row| {
            let qb_id = roster.resolve(Some(row.player_name.as_str()))?;
            let line = StatLine {
                passing_yards: row.passing_yards,
                rushing_yards: row.rushing_yards,
                passing_tds: row.passing_tds,
                rushing_tds: row.rushing_tds,
                receiving_tds: row.receiving_tds,
                interceptions: row.interceptions,
                fumbles: row.fumbles_lost,
                game_won: false,
                prime_time_win: false,
            };
            Some((qb_id, line))
        })
        .collect()
}

/// Award credits derived from provider award rows.
#[derive(Debug, Default)]
pub struct AwardPlan {
    pub credits: Vec<(Uuid, BonusType)>,
    pub unresolved: Vec<String>,
}

pub fn plan_award_credits(rows: &[ProviderAwardRow], roster: &RosterIndex) -> AwardPlan {
    let mut plan = AwardPlan::default();
    for row in rows {
        let bonus_type = match row.award.as_str() {
            "POW" => BonusType::ConfPow,
            "POM" => BonusType::ConfPom,
            other => {
                plan.unresolved
                    .push(format!("unknown award code {} for {}", other, row.player_name));
                continue;
            }
        };
        match roster.resolve(Some(row.player_name.as_str())) {
            Some(qb_id) => plan.credits.push((qb_id, bonus_type)),
            None => continue,
        }
    }
    plan
}
