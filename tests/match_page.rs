use std::fs;
use std::path::PathBuf;

use fsg_studio::match_page::extract_match;
use fsg_studio::page::Page;
use fsg_studio::types::{Field, MotmWinner, Score};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn extracts_match_record() {
    let page = Page::parse(&read_fixture("game_details.html"));
    let extract = extract_match(&page);
    let record = &extract.record;

    assert_eq!(record.home_team, Field::Present("Tigers FC".into()));
    assert_eq!(record.away_team, Field::Present("Goon Squad".into()));
    assert_eq!(record.home_score, Score::Known(3));
    assert_eq!(record.away_score, Score::Known(1));
    assert_eq!(record.round, Field::Present("Round 7".into()));
    assert_eq!(record.league, Field::Present("Goondesliga".into()));
    assert_eq!(record.venue, Field::Present("Tiger Dome".into()));
    assert_eq!(record.referee, Field::Present("Boris Whistleman".into()));
    assert_eq!(
        record.motm_winner(),
        MotmWinner::Winner("Archie Bunkler".into())
    );
    assert_eq!(record.score_line(), "Tigers FC 3-1 Goon Squad");
}

#[test]
fn extracts_lineups_with_tooltip_details() {
    let page = Page::parse(&read_fixture("game_details.html"));
    let extract = extract_match(&page);
    let players = &extract.performances;

    assert_eq!(players.len(), 6);

    let archie = players
        .iter()
        .find(|p| p.name == "Archie Bunkler")
        .expect("home striker present");
    assert_eq!(archie.team, "Tigers FC");
    assert_eq!(archie.position, "FW");
    assert_eq!(archie.grade, Some(9));
    assert!(archie.goal);
    assert!(!archie.booked);

    let stone = players.iter().find(|p| p.name == "Bob Stone").unwrap();
    assert_eq!(stone.grade, Some(7));
    assert!(stone.booked);

    let quick = players.iter().find(|p| p.name == "Sam Quick").unwrap();
    assert_eq!(quick.grade, None);

    let spoonov = players.iter().find(|p| p.name == "Dmitri Spoonov").unwrap();
    assert_eq!(spoonov.team, "Goon Squad");
    assert!(spoonov.goal);
    assert!(spoonov.injured);
}

#[test]
fn event_pass_filters_substitutions_by_impact() {
    let page = Page::parse(&read_fixture("game_details.html"));
    let extract = extract_match(&page);
    let events = &extract.events;

    // Five kept in page order plus the one impactful substitution at the end.
    assert_eq!(events.len(), 6);
    assert_eq!(events[0].minute, "12");
    assert!(!events[0].description.contains("(Grade:"));
    assert_eq!(events[0].score_snapshot.as_deref(), Some("1 - 0"));

    let last = events.last().unwrap();
    assert!(last.description.contains("Rocco subbed in"));
    assert!(events.iter().all(|e| !e.description.contains("Lazlo")));

    assert_eq!(events[0].to_string(), "12' - Goal! Archie Bunkler slots it home (Score: 1 - 0)");
}

#[test]
fn empty_page_degrades_to_sentinels() {
    let page = Page::parse("<html><body><p>maintenance</p></body></html>");
    let extract = extract_match(&page);

    assert_eq!(extract.record.home_team, Field::Unavailable);
    assert_eq!(extract.record.home_score, Score::Unknown);
    assert_eq!(extract.record.motm_winner(), MotmWinner::Unknown);
    assert_eq!(extract.record.score_line(), "N/A N/A-N/A N/A");
    assert!(extract.performances.is_empty());
    assert!(extract.events.is_empty());
}
