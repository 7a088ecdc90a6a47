use uuid::Uuid;

use howell_league_backend::league::payout::PayoutTable;
use howell_league_backend::league::standings::{
    rank_squads, sort_roster, squad_total, worst_rostered_qb, QbPoints, SquadScoresheet,
};
use howell_league_backend::models::quarterback::QuarterbackSummary;
use howell_league_backend::models::squad::Squad;

fn uuid(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

fn qb(n: u128, total_points: f64) -> QbPoints {
    QbPoints {
        qb_id: uuid(n),
        name: format!("QB {}", n),
        nfl_team: "KC".to_string(),
        total_points,
    }
}

fn squad(n: u128) -> Squad {
    Squad {
        id: uuid(n),
        name: format!("Squad {}", n),
        owner: format!("Owner {}", n),
        season: 2025,
    }
}

fn summary(n: u128, squad_id: Option<Uuid>, total_points: f64) -> QuarterbackSummary {
    QuarterbackSummary {
        id: uuid(n),
        name: format!("QB {}", n),
        nfl_team: "KC".to_string(),
        squad_id,
        squad_name: squad_id.map(|_| "Some Squad".to_string()),
        total_points,
    }
}

#[test]
fn squad_total_counts_exactly_the_top_five() {
    // Full 8-QB roster: 80, 70, 60, 50, 40 count; 30, 20, 10 do not.
    let mut qbs: Vec<QbPoints> = (1..=8).map(|n| qb(n, (n * 10) as f64)).collect();
    sort_roster(&mut qbs);
    assert_eq!(squad_total(&qbs), 300.0);

    // The bottom three can change without moving the total.
    let mut flattened: Vec<QbPoints> = (1..=5)
        .map(|n| qb(n, ((n + 3) * 10) as f64))
        .chain((6..=8).map(|n| qb(n, 0.0)))
        .collect();
    sort_roster(&mut flattened);
    assert_eq!(squad_total(&flattened), 300.0);
}

#[test]
fn quarterback_ties_break_by_ascending_id() {
    let mut qbs = vec![qb(7, 50.0), qb(3, 50.0), qb(5, 60.0)];
    sort_roster(&mut qbs);
    let order: Vec<Uuid> = qbs.iter().map(|q| q.qb_id).collect();
    assert_eq!(order, vec![uuid(5), uuid(3), uuid(7)]);
}

#[test]
fn standings_rank_by_total_with_id_tiebreak() {
    let payout = PayoutTable::new(70);
    let sheets = vec![
        SquadScoresheet {
            squad: squad(2),
            qbs: vec![qb(20, 100.0)],
        },
        SquadScoresheet {
            squad: squad(1),
            qbs: vec![qb(10, 100.0)],
        },
        SquadScoresheet {
            squad: squad(3),
            qbs: vec![qb(30, 250.0)],
        },
    ];

    let standings = rank_squads(sheets, &payout);

    assert_eq!(standings[0].squad_id, uuid(3));
    assert_eq!(standings[0].rank, 1);
    // Equal totals: the lower squad id ranks higher.
    assert_eq!(standings[1].squad_id, uuid(1));
    assert_eq!(standings[1].rank, 2);
    assert_eq!(standings[2].squad_id, uuid(2));
    assert_eq!(standings[2].rank, 3);
}

#[test]
fn standings_embed_at_most_five_quarterbacks() {
    let payout = PayoutTable::new(70);
    let sheets = vec![SquadScoresheet {
        squad: squad(1),
        qbs: (1..=8).map(|n| qb(n, n as f64)).collect(),
    }];

    let standings = rank_squads(sheets, &payout);
    assert_eq!(standings[0].top_qbs.len(), 5);
    assert_eq!(standings[0].total_points, 8.0 + 7.0 + 6.0 + 5.0 + 4.0);
}

#[test]
fn six_squad_payouts_follow_the_dues_formula() {
    let payout = PayoutTable::new(70);
    let sheets: Vec<SquadScoresheet> = (1..=6)
        .map(|n| SquadScoresheet {
            squad: squad(n),
            qbs: vec![qb(n * 10, (700 - n as i64 * 100) as f64)],
        })
        .collect();

    let standings = rank_squads(sheets, &payout);
    let payouts: Vec<i64> = standings.iter().map(|s| s.projected_payout).collect();
    assert_eq!(payouts, vec![420, 0, -70, -70, -70, -210]);
}

#[test]
fn worst_qb_ignores_free_agents_and_non_positive_totals() {
    let squad_id = Some(uuid(99));
    let qbs = vec![
        summary(1, squad_id, 120.0),
        // Free agent with the lowest positive total: excluded
        summary(2, None, 3.0),
        // Rostered but scoreless: excluded
        summary(3, squad_id, 0.0),
        summary(4, squad_id, -6.0),
        summary(5, squad_id, 8.5),
    ];

    let worst = worst_rostered_qb(&qbs).expect("expected a worst QB");
    assert_eq!(worst.id, uuid(5));
    assert_eq!(worst.total_points, 8.5);
}

#[test]
fn worst_qb_ties_go_to_the_lowest_id() {
    let squad_id = Some(uuid(99));
    let qbs = vec![
        summary(8, squad_id, 4.0),
        summary(2, squad_id, 4.0),
        summary(5, squad_id, 40.0),
    ];

    let worst = worst_rostered_qb(&qbs).expect("expected a worst QB");
    assert_eq!(worst.id, uuid(2));
}

#[test]
fn worst_qb_is_none_when_nobody_qualifies() {
    let qbs = vec![summary(1, None, 50.0), summary(2, Some(uuid(9)), 0.0)];
    assert!(worst_rostered_qb(&qbs).is_none());
}
