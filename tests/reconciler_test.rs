use std::collections::HashMap;
use uuid::Uuid;

use howell_league_backend::models::stats::{BonusType, PlayoffRound};
use howell_league_backend::models::sync::{ProviderAwardRow, ProviderGame, ProviderSeasonStatRow};
use howell_league_backend::sync::reconcile::{
    plan_award_credits, plan_playoff_credits, plan_season_stat_rows, plan_win_credits, RosterIndex,
};

fn uuid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn roster() -> RosterIndex {
    let mut by_name = HashMap::new();
    by_name.insert("Patrick Mahomes".to_string(), uuid(1));
    by_name.insert("Josh Allen".to_string(), uuid(2));
    by_name.insert("Jared Goff".to_string(), uuid(3));
    RosterIndex::new(by_name)
}

fn game(week: i32, game_type: &str) -> ProviderGame {
    ProviderGame {
        season: 2025,
        week,
        game_type: game_type.to_string(),
        home_team: "KC".to_string(),
        away_team: "BUF".to_string(),
        home_qb_name: Some("Patrick Mahomes".to_string()),
        away_qb_name: Some("Josh Allen".to_string()),
        home_score: Some(27),
        away_score: Some(20),
        kickoff: Some("13:00".to_string()),
    }
}

#[test]
fn only_the_winning_starter_is_credited() {
    let plan = plan_win_credits(&[game(1, "REG")], &roster(), &HashMap::new());

    assert_eq!(plan.credits.len(), 1);
    assert_eq!(plan.credits[0].qb_id, uuid(1));
    assert_eq!(plan.credits[0].week, 1);
    assert!(!plan.credits[0].prime_time);
    assert!(plan.unresolved.is_empty());
}

#[test]
fn evening_kickoffs_are_prime_time_wins() {
    let mut g = game(5, "REG");
    g.kickoff = Some("20:15".to_string());
    let plan = plan_win_credits(&[g], &roster(), &HashMap::new());
    assert!(plan.credits[0].prime_time);

    let mut g = game(6, "REG");
    g.kickoff = None;
    let plan = plan_win_credits(&[g], &roster(), &HashMap::new());
    assert!(!plan.credits[0].prime_time);
}

#[test]
fn ties_and_unfinished_games_credit_nobody() {
    let mut tie = game(2, "REG");
    tie.home_score = Some(21);
    tie.away_score = Some(21);

    let mut pending = game(3, "REG");
    pending.home_score = None;
    pending.away_score = None;

    let plan = plan_win_credits(&[tie, pending], &roster(), &HashMap::new());
    assert!(plan.credits.is_empty());
    assert!(plan.unresolved.is_empty());
}

#[test]
fn playoff_games_are_not_win_credits() {
    let plan = plan_win_credits(&[game(19, "WC")], &roster(), &HashMap::new());
    assert!(plan.credits.is_empty());
}

#[test]
fn rerunning_the_win_sync_credits_nothing_new() {
    let games = vec![game(1, "REG"), game(2, "REG")];
    let first = plan_win_credits(&games, &roster(), &HashMap::new());
    assert_eq!(first.credits.len(), 2);

    // Apply the first run: every credited (qb, week) now has a win.
    let credited: HashMap<(Uuid, i32), bool> = first
        .credits
        .iter()
        .map(|c| ((c.qb_id, c.week), true))
        .collect();

    let second = plan_win_credits(&games, &roster(), &credited);
    assert!(second.credits.is_empty());
    assert_eq!(second.already_credited, 2);
}

#[test]
fn a_stat_line_without_a_win_still_gets_credited() {
    // A synced stat row exists for the week but game_won is false.
    let mut credited = HashMap::new();
    credited.insert((uuid(1), 1), false);

    let plan = plan_win_credits(&[game(1, "REG")], &roster(), &credited);
    assert_eq!(plan.credits.len(), 1);
}

#[test]
fn games_with_unknown_starters_are_reported_not_fatal() {
    let mut no_qb = game(4, "REG");
    no_qb.home_qb_name = None;

    let plan = plan_win_credits(&[no_qb, game(5, "REG")], &roster(), &HashMap::new());
    assert_eq!(plan.credits.len(), 1);
    assert_eq!(plan.unresolved.len(), 1);
    assert!(plan.unresolved[0].contains("KC"));
}

#[test]
fn unrostered_winners_are_silently_skipped() {
    let mut g = game(7, "REG");
    g.home_qb_name = Some("Backup Nobody".to_string());

    let plan = plan_win_credits(&[g], &roster(), &HashMap::new());
    assert!(plan.credits.is_empty());
    assert!(plan.unresolved.is_empty());
}

#[test]
fn both_playoff_starters_are_credited_for_the_round() {
    let plan = plan_playoff_credits(&[game(19, "WC")], &roster(), &HashMap::new());

    assert_eq!(plan.credits.len(), 2);
    assert!(plan
        .credits
        .iter()
        .all(|c| c.round == PlayoffRound::WildCard && !c.won_super_bowl));
}

#[test]
fn super_bowl_winner_carries_the_win_flag() {
    let plan = plan_playoff_credits(&[game(22, "SB")], &roster(), &HashMap::new());

    let mahomes = plan.credits.iter().find(|c| c.qb_id == uuid(1)).unwrap();
    let allen = plan.credits.iter().find(|c| c.qb_id == uuid(2)).unwrap();
    assert!(mahomes.won_super_bowl);
    assert!(!allen.won_super_bowl);
}

#[test]
fn existing_appearances_are_skipped_or_upgraded() {
    let mut existing = HashMap::new();
    // Mahomes already has a Super Bowl appearance without the win.
    existing.insert((uuid(1), PlayoffRound::SuperBowl), false);
    // Allen's appearance is already recorded.
    existing.insert((uuid(2), PlayoffRound::SuperBowl), false);

    let plan = plan_playoff_credits(&[game(22, "SB")], &roster(), &existing);

    assert!(plan.credits.is_empty());
    assert_eq!(plan.upgrades, vec![uuid(1)]);
    assert_eq!(plan.already_credited, 1);
}

#[test]
fn rerunning_the_playoff_sync_credits_nothing_new() {
    let games = vec![game(19, "WC"), game(20, "DIV")];
    let first = plan_playoff_credits(&games, &roster(), &HashMap::new());
    assert_eq!(first.credits.len(), 4);

    let existing: HashMap<(Uuid, PlayoffRound), bool> = first
        .credits
        .iter()
        .map(|c| ((c.qb_id, c.round), c.won_super_bowl))
        .collect();

    let second = plan_playoff_credits(&games, &roster(), &existing);
    assert!(second.credits.is_empty());
    assert!(second.upgrades.is_empty());
    assert_eq!(second.already_credited, 4);
}

#[test]
fn season_stat_rows_match_rostered_qbs_only() {
    let rows = vec![
        ProviderSeasonStatRow {
            player_name: "Patrick Mahomes".to_string(),
            position: "QB".to_string(),
            passing_yards: 4500,
            rushing_yards: 300,
            passing_tds: 38,
            rushing_tds: 2,
            receiving_tds: 0,
            interceptions: 11,
            fumbles_lost: 3,
        },
        // Right name, wrong position: a tight end stays out of QB stats
        ProviderSeasonStatRow {
            player_name: "Josh Allen".to_string(),
            position: "TE".to_string(),
            passing_yards: 0,
            rushing_yards: 12,
            passing_tds: 0,
            rushing_tds: 1,
            receiving_tds: 5,
            interceptions: 0,
            fumbles_lost: 0,
        },
        ProviderSeasonStatRow {
            player_name: "Unknown Rookie".to_string(),
            position: "QB".to_string(),
            passing_yards: 900,
            rushing_yards: 0,
            passing_tds: 4,
            rushing_tds: 0,
            receiving_tds: 0,
            interceptions: 6,
            fumbles_lost: 2,
        },
    ];

    let upserts = plan_season_stat_rows(&rows, &roster());
    assert_eq!(upserts.len(), 1);
    let (qb_id, line) = &upserts[0];
    assert_eq!(*qb_id, uuid(1));
    assert_eq!(line.passing_yards, 4500);
    assert!(!line.game_won);
}

#[test]
fn award_rows_map_to_conference_bonuses() {
    let rows = vec![
        ProviderAwardRow {
            player_name: "Josh Allen".to_string(),
            award: "POW".to_string(),
        },
        ProviderAwardRow {
            player_name: "Jared Goff".to_string(),
            award: "POM".to_string(),
        },
        ProviderAwardRow {
            player_name: "Josh Allen".to_string(),
            award: "MVP?".to_string(),
        },
        ProviderAwardRow {
            player_name: "Unknown Rookie".to_string(),
            award: "POW".to_string(),
        },
    ];

    let plan = plan_award_credits(&rows, &roster());
    assert_eq!(
        plan.credits,
        vec![(uuid(2), BonusType::ConfPow), (uuid(3), BonusType::ConfPom)]
    );
    assert_eq!(plan.unresolved.len(), 1);
}
