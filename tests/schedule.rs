use fsg_studio::schedule::{CHANNELS, NO_FIXTURES, render, schedule};
use fsg_studio::types::{Fixture, League, StandingsEntry};

fn entry(team: &str, points: i32) -> StandingsEntry {
    StandingsEntry {
        place: 0,
        team: team.to_string(),
        played: 7,
        wins: 0,
        draws: 0,
        losses: 0,
        goals_for: 0,
        goals_against: 0,
        goal_difference: 0,
        points,
    }
}

fn fixture(home: &str, away: &str, game_id: &str) -> Fixture {
    Fixture {
        home_team: home.to_string(),
        away_team: away.to_string(),
        game_id: game_id.to_string(),
    }
}

fn standings() -> Vec<StandingsEntry> {
    vec![
        entry("Tigers FC", 19),
        entry("Goon Squad", 17),
        entry("Mudchester", 7),
        entry("Spoon Rangers", 16),
        entry("Ladle United", 14),
        entry("Fork Island", 3),
    ]
}

#[test]
fn marquee_league_fixture_is_pinned_first() {
    let fixtures = vec![
        // Highest stake overall belongs to the secondary league.
        (League::Spoondesliga, fixture("Spoon Rangers", "Ladle United", "1")),
        (League::Goondesliga, fixture("Tigers FC", "Mudchester", "2")),
        (League::Goondesliga, fixture("Goon Squad", "Fork Island", "3")),
    ];
    let tv = schedule(&fixtures, &standings()).expect("fixtures present");

    let marquee = tv.marquee.clone().expect("marquee fixture");
    assert_eq!(marquee.pairing, "Tigers FC vs Mudchester");
    assert!(marquee.league.is_marquee());

    // Remaining fixtures fill the later channels by stake, marquee skipped.
    let slots: Vec<(&str, &str)> = tv
        .slots
        .iter()
        .map(|(channel, f)| (*channel, f.pairing.as_str()))
        .collect();
    assert_eq!(
        slots,
        vec![
            (CHANNELS[1], "Spoon Rangers vs Ladle United"),
            (CHANNELS[2], "Goon Squad vs Fork Island"),
        ]
    );

    let rendered = render(Some(&tv));
    assert!(rendered.starts_with("📺 FoxSportsGoon TV Kzhedule ⚽"));
    let marquee_at = rendered.find("Tigers FC vs Mudchester").unwrap();
    let runner_up_at = rendered.find("Spoon Rangers vs Ladle United").unwrap();
    assert!(marquee_at < runner_up_at);
}

#[test]
fn unresolved_teams_count_for_zero_stake() {
    let fixtures = vec![
        (League::Spoondesliga, fixture("Nobody FC", "Who Dat", "1")),
        (League::Spoondesliga, fixture("Spoon Rangers", "Ladle United", "2")),
    ];
    let tv = schedule(&fixtures, &standings()).expect("fixtures present");
    assert!(tv.marquee.is_none());
    assert_eq!(tv.slots[0].1.pairing, "Spoon Rangers vs Ladle United");
    assert_eq!(tv.slots[1].1.stake, 0);
}

#[test]
fn overflow_fixtures_are_dropped() {
    let fixtures: Vec<(League, Fixture)> = (0..10)
        .map(|i| {
            (
                League::Spoondesliga,
                fixture(&format!("Home {i}"), &format!("Away {i}"), &i.to_string()),
            )
        })
        .collect();
    let tv = schedule(&fixtures, &standings()).expect("fixtures present");
    // First channel is reserved for a marquee that never shows up here.
    assert_eq!(tv.slots.len(), CHANNELS.len() - 1);
}

#[test]
fn zero_fixtures_yield_the_sentinel() {
    assert!(schedule(&[], &standings()).is_none());
    assert_eq!(render(None), NO_FIXTURES);
}
