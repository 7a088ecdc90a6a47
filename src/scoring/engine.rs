// src/scoring/engine.rs
//
// League scoring rules:
// - 25 passing yards = 1 point, 10 rushing yards = 1 point (exact
//   fractional division, no truncation)
// - any touchdown = 6 points
// - interceptions and fumbles = -3 points each
// - regular season win = 3 points, prime time win = 4 points
// Totals may go below zero; there is no floor.
use serde::{Deserialize, Serialize};

use crate::models::stats::{BonusType, PlayoffAppearance, PlayoffRound, SeasonBonus, StatLine, WeeklyStat};

pub const SUPER_BOWL_WIN_BONUS: f64 = 25.0;

/// Round to two decimals; points are reported at cent precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a single weekly stat line.
pub fn score_weekly(line: &StatLine) -> f64 {
    let mut points = 0.0;

    points += line.passing_yards as f64 / 25.0;
    points += line.rushing_yards as f64 / 10.0;

    let total_tds = line.passing_tds + line.rushing_tds + line.receiving_tds;
    points += total_tds as f64 * 6.0;

    points -= line.interceptions as f64 * 3.0;
    points -= line.fumbles as f64 * 3.0;

    if line.game_won {
        points += if line.prime_time_win { 4.0 } else { 3.0 };
    }

    round2(points)
}

/// Fixed point value of a season bonus.
pub fn bonus_points(bonus_type: BonusType) -> f64 {
    match bonus_type {
        BonusType::Mvp => 50.0,
        BonusType::MvpRunnerUp => 40.0,
        BonusType::MvpThird => 30.0,
        BonusType::MvpFourth => 20.0,
        BonusType::MvpFifth => 10.0,
        BonusType::RookieOfYear => 30.0,
        BonusType::ConfPow => 10.0,
        BonusType::ConfPom => 20.0,
    }
}

/// Points for a playoff round appearance. Rounds are cumulative, so a
/// Super Bowl quarterback also carries separate appearance records for
/// the earlier rounds. Winning the Super Bowl adds 25 on top of the
/// appearance value.
pub fn playoff_points(round: PlayoffRound, won_super_bowl: bool) -> f64 {
    let mut points = match round {
        PlayoffRound::WildCard => 3.0,
        PlayoffRound::Divisional => 6.0,
        PlayoffRound::ConfChampionship => 10.0,
        PlayoffRound::SuperBowl => 15.0,
    };
    if round == PlayoffRound::SuperBowl && won_super_bowl {
        points += SUPER_BOWL_WIN_BONUS;
    }
    points
}

/// Per-category totals plus the grand total for one quarterback season.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub weekly_total: f64,
    pub bonus_total: f64,
    pub playoff_total: f64,
    pub grand_total: f64,
}

/// Aggregate stored record points into the season breakdown. The stored
/// `points` columns are themselves engine output, recomputed on every
/// write, so the invariant grand = weekly + bonus + playoff holds by
/// construction.
pub fn score_quarterback(
    weekly: &[WeeklyStat],
    bonuses: &[SeasonBonus],
    playoffs: &[PlayoffAppearance],
) -> ScoreBreakdown {
    let weekly_total = round2(weekly.iter().map(|s| s.points).sum());
    let bonus_total = round2(bonuses.iter().map(|b| b.points).sum());
    let playoff_total = round2(playoffs.iter().map(|p| p.points).sum());
    ScoreBreakdown {
        weekly_total,
        bonus_total,
        playoff_total,
        grand_total: round2(weekly_total + bonus_total + playoff_total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_line() -> StatLine {
        StatLine::default()
    }

    #[test]
    fn zero_stats_score_nothing() {
        assert_eq!(score_weekly(&zero_line()), 0.0);
    }

    #[test]
    fn zero_stats_with_win_score_win_bonus_only() {
        let win = StatLine {
            game_won: true,
            ..zero_line()
        };
        assert_eq!(score_weekly(&win), 3.0);

        let prime = StatLine {
            game_won: true,
            prime_time_win: true,
            ..zero_line()
        };
        assert_eq!(score_weekly(&prime), 4.0);
    }

    #[test]
    fn prime_time_flag_without_win_scores_nothing() {
        let line = StatLine {
            prime_time_win: true,
            ..zero_line()
        };
        assert_eq!(score_weekly(&line), 0.0);
    }

    #[test]
    fn yardage_divides_fractionally() {
        let line = StatLine {
            passing_yards: 10,
            ..zero_line()
        };
        assert_eq!(score_weekly(&line), 0.4);

        let line = StatLine {
            rushing_yards: 5,
            ..zero_line()
        };
        assert_eq!(score_weekly(&line), 0.5);
    }

    #[test]
    fn full_line_matches_rulebook_example() {
        // 250/25 + 0 + 2*6 - 3 + 3 = 22.0
        let line = StatLine {
            passing_yards: 250,
            passing_tds: 2,
            interceptions: 1,
            game_won: true,
            ..zero_line()
        };
        assert_eq!(score_weekly(&line), 22.0);
    }

    #[test]
    fn turnovers_can_push_total_below_zero() {
        let line = StatLine {
            interceptions: 3,
            fumbles: 1,
            ..zero_line()
        };
        assert_eq!(score_weekly(&line), -12.0);
    }

    #[test]
    fn bonus_table_values() {
        assert_eq!(bonus_points(BonusType::Mvp), 50.0);
        assert_eq!(bonus_points(BonusType::MvpRunnerUp), 40.0);
        assert_eq!(bonus_points(BonusType::MvpThird), 30.0);
        assert_eq!(bonus_points(BonusType::MvpFourth), 20.0);
        assert_eq!(bonus_points(BonusType::MvpFifth), 10.0);
        assert_eq!(bonus_points(BonusType::RookieOfYear), 30.0);
        assert_eq!(bonus_points(BonusType::ConfPow), 10.0);
        assert_eq!(bonus_points(BonusType::ConfPom), 20.0);
    }

    #[test]
    fn playoff_rounds_are_table_lookups() {
        assert_eq!(playoff_points(PlayoffRound::WildCard, false), 3.0);
        assert_eq!(playoff_points(PlayoffRound::Divisional, false), 6.0);
        assert_eq!(playoff_points(PlayoffRound::ConfChampionship, false), 10.0);
        assert_eq!(playoff_points(PlayoffRound::SuperBowl, false), 15.0);
    }

    #[test]
    fn super_bowl_win_adds_twenty_five() {
        assert_eq!(playoff_points(PlayoffRound::SuperBowl, true), 40.0);
        // The win bonus only applies to the Super Bowl itself
        assert_eq!(playoff_points(PlayoffRound::WildCard, true), 3.0);
    }
}
