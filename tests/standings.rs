use fsg_studio::standings::{MISSING_STANDINGS, classify, rank, summary};
use fsg_studio::types::{League, StandingsEntry};

fn entry(team: &str, points: i32, diff: i32) -> StandingsEntry {
    StandingsEntry {
        place: 0,
        team: team.to_string(),
        played: 7,
        wins: 0,
        draws: 0,
        losses: 0,
        goals_for: 0,
        goals_against: 0,
        goal_difference: diff,
        points,
    }
}

#[test]
fn goal_difference_breaks_point_ties() {
    let ranked = rank(vec![
        entry("A", 30, 10),
        entry("B", 30, 12),
        entry("C", 26, 1),
    ]);
    let order: Vec<&str> = ranked.iter().map(|e| e.team.as_str()).collect();
    assert_eq!(order, vec!["B", "A", "C"]);
}

#[test]
fn full_ties_fall_back_to_team_name() {
    let ranked = rank(vec![
        entry("Zebras", 10, 0),
        entry("Aardvarks", 10, 0),
        entry("Mudchester", 10, 0),
    ]);
    let order: Vec<&str> = ranked.iter().map(|e| e.team.as_str()).collect();
    assert_eq!(order, vec!["Aardvarks", "Mudchester", "Zebras"]);
}

#[test]
fn rank_order_is_monotone() {
    let ranked = rank(vec![
        entry("E", 5, -3),
        entry("A", 19, 11),
        entry("C", 15, 4),
        entry("B", 17, 9),
        entry("D", 15, 6),
    ]);
    for pair in ranked.windows(2) {
        assert!(pair[0].points >= pair[1].points);
        if pair[0].points == pair[1].points {
            assert!(pair[0].goal_difference >= pair[1].goal_difference);
        }
    }
}

#[test]
fn hunt_pack_is_within_four_points_of_the_leader() {
    let ranked = rank(vec![
        entry("Leader", 19, 11),
        entry("Close", 17, 9),
        entry("Edge", 15, 4),
        entry("Far", 14, 1),
    ]);
    let bands = classify(&ranked).unwrap();
    assert_eq!(bands.leader.team, "Leader");
    let pack: Vec<&str> = bands.hunt_pack.iter().map(|e| e.team.as_str()).collect();
    assert_eq!(pack, vec!["Close", "Edge"]);
}

#[test]
fn bottom_watch_requires_six_teams() {
    let few = rank(vec![
        entry("A", 12, 3),
        entry("B", 10, 1),
        entry("C", 8, 0),
        entry("D", 6, -1),
        entry("E", 4, -3),
    ]);
    let bands = classify(&few).unwrap();
    assert!(bands.bottom_watch.is_empty());
}

#[test]
fn bottom_watch_spans_from_sixth_place() {
    let ranked = rank(vec![
        entry("A", 19, 11),
        entry("B", 17, 9),
        entry("C", 15, 4),
        entry("D", 11, 1),
        entry("E", 8, -2),
        entry("F", 7, -5),
        entry("G", 5, -7),
        entry("H", 2, -11),
        entry("I", 12, 2),
    ]);
    let bands = classify(&ranked).unwrap();
    // Sixth-ranked team has 8 points, so everyone from there with at most 12.
    let watch: Vec<&str> = bands.bottom_watch.iter().map(|e| e.team.as_str()).collect();
    assert_eq!(watch, vec!["E", "F", "G", "H"]);
}

#[test]
fn summary_renders_bands_with_league_label() {
    let entries = vec![
        entry("Tigers FC", 19, 11),
        entry("Goon Squad", 17, 9),
        entry("Real Sociedont", 15, 4),
        entry("Spanners United", 11, 1),
        entry("Dough Rollers", 8, -2),
        entry("Mudchester", 7, -5),
        entry("Sofa Kings", 5, -7),
        entry("Basement Boys", 2, -11),
    ];

    let goon = summary(&entries, League::Goondesliga);
    assert!(goon.starts_with("🏆 Tigers FC lead the league with 19 points."));
    assert!(goon.contains("⚔️ In the Hunt: Goon Squad (17 pts), Real Sociedont (15 pts)"));
    assert!(goon.contains("📉 Relegation watch: Mudchester (7 pts), Sofa Kings (5 pts), Basement Boys (2 pts)"));

    let spoon = summary(&entries, League::Spoondesliga);
    assert!(spoon.contains("🪨 Rock Bottom Watch:"));
    assert!(!spoon.contains("Relegation watch"));
}

#[test]
fn empty_standings_render_the_missing_sentinel() {
    assert_eq!(summary(&[], League::Goondesliga), MISSING_STANDINGS);
}
