use scraper::ElementRef;

use crate::page::{self, Page, cells_of, element_text, find_in, game_id_in, parent_row};
use crate::types::{Fixture, StandingsEntry};

/// Parse the league standings table. Rows are all-or-nothing: a row with any
/// unparseable integer cell is dropped rather than kept partially filled.
pub fn parse_standings(page: &Page) -> Vec<StandingsEntry> {
    let mut standings = Vec::new();
    // First row is the header.
    for row in page.select(&page::STANDINGS_ROWS).skip(1) {
        let cols = cells_of(row);
        if cols.len() < 12 {
            continue;
        }
        match parse_standings_row(&cols) {
            Some(entry) => standings.push(entry),
            None => log::warn!("dropping unparseable standings row"),
        }
    }
    standings
}

fn parse_standings_row(cols: &[ElementRef<'_>]) -> Option<StandingsEntry> {
    let place = element_text(cols[0])
        .trim_matches('.')
        .parse::<u32>()
        .ok()?;
    let team_cell = cols[2];
    let team = match find_in(team_cell, &page::ANCHOR) {
        Some(link) => element_text(link),
        None => element_text(team_cell),
    };

    let wins = element_text(cols[6]).parse::<u32>().ok()?;
    let draws = element_text(cols[7]).parse::<u32>().ok()?;
    let losses = element_text(cols[8]).parse::<u32>().ok()?;

    // Goals column reads like "9 - 5".
    let gf_ga = element_text(cols[9]);
    let mut goals = gf_ga.split('-');
    let goals_for = goals.next()?.trim().parse::<u32>().ok()?;
    let goals_against = goals.next()?.trim().parse::<u32>().ok()?;

    let goal_difference = element_text(cols[10])
        .replace('+', "")
        .parse::<i32>()
        .ok()?;
    let points = element_text(cols[11]).parse::<i32>().ok()?;

    Some(StandingsEntry {
        place,
        team,
        played: wins + draws + losses,
        wins,
        draws,
        losses,
        goals_for,
        goals_against,
        goal_difference,
        points,
    })
}

/// Upcoming fixtures share the standings page; each row carries its game id
/// in an onclick handler.
pub fn parse_upcoming(page: &Page) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for row in page.select(&page::UPCOMING_ROWS) {
        let Some(onclick) = row.value().attr("onclick") else {
            continue;
        };
        let Some(game_id) = game_id_in(onclick) else {
            continue;
        };
        let cols = cells_of(row);
        if cols.len() < 4 {
            continue;
        }
        fixtures.push(Fixture {
            home_team: element_text(cols[1]),
            away_team: element_text(cols[3]),
            game_id,
        });
    }
    fixtures
}

/// Recently played matches, most recent first as rendered by the source.
pub fn parse_results(page: &Page) -> Vec<Fixture> {
    let mut results = Vec::new();
    for link in page.select(&page::GAME_LINKS) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Some(game_id) = game_id_in(href) else {
            continue;
        };
        let Some(row) = parent_row(link) else {
            continue;
        };
        let cols = cells_of(row);
        let (Some(home), Some(away)) = (cols.get(1), cols.get(3)) else {
            continue;
        };
        results.push(Fixture {
            home_team: element_text(*home),
            away_team: element_text(*away),
            game_id,
        });
    }
    results
}
