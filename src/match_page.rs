use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::page::{self, Page, cells_of, element_text, find_in, ids};
use crate::types::{Field, MatchEvent, MatchRecord, PlayerPerformance, Score};

/// Everything one match page yields: the record, every fielded player, and
/// the filtered event log.
#[derive(Debug, Clone)]
pub struct MatchExtract {
    pub record: MatchRecord,
    pub performances: Vec<PlayerPerformance>,
    pub events: Vec<MatchEvent>,
}

static GRADE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(Grade:\s*\d+\)").expect("static regex"));
static TOOLTIP_GRADE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Grade:\s*(\d+)").expect("static regex"));
static SUB_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)").expect("static regex"));

const IMPACT_KEYWORDS: &[&str] = &["goal", "assist", "injured", "red card", "sent off"];

/// Run the three independent extraction passes over one match page. Each pass
/// degrades to sentinels on missing markup; none of them can fail the others.
pub fn extract_match(page: &Page) -> MatchExtract {
    let record = parse_record(page);
    let performances = parse_lineups(page, &record.home_team, &record.away_team);
    let events = parse_events(page);
    MatchExtract {
        record,
        performances,
        events,
    }
}

fn parse_record(page: &Page) -> MatchRecord {
    let home_score = match page.text_by_id(ids::HOME_SCORE) {
        Field::Present(t) => Score::parse(&t),
        Field::Unavailable => Score::Unknown,
    };
    let away_score = match page.text_by_id(ids::AWAY_SCORE) {
        Field::Present(t) => Score::parse(&t),
        Field::Unavailable => Score::Unknown,
    };
    MatchRecord {
        home_team: page.text_by_id(ids::HOME_TEAM),
        away_team: page.text_by_id(ids::AWAY_TEAM),
        home_score,
        away_score,
        round: page.text_by_id(ids::ROUND),
        league: page.text_by_id(ids::LEAGUE),
        venue: page.text_by_id(ids::VENUE),
        referee: page.text_by_id(ids::REFEREE),
        motm_home: page.text_by_id(ids::MOTM_HOME),
        motm_away: page.text_by_id(ids::MOTM_AWAY),
    }
}

fn parse_lineups(page: &Page, home_team: &Field, away_team: &Field) -> Vec<PlayerPerformance> {
    let mut players = Vec::new();
    for row in page.select(&page::HOME_LINEUP_ROWS) {
        if let Some(p) = parse_lineup_row(
            row,
            &page::HOME_POSITION,
            &page::HOME_PLAYER_NAME,
            home_team.as_str(),
        ) {
            players.push(p);
        }
    }
    for row in page.select(&page::AWAY_LINEUP_ROWS) {
        if let Some(p) = parse_lineup_row(
            row,
            &page::AWAY_POSITION,
            &page::AWAY_PLAYER_NAME,
            away_team.as_str(),
        ) {
            players.push(p);
        }
    }
    players
}

fn parse_lineup_row(
    row: scraper::ElementRef<'_>,
    position_sel: &scraper::Selector,
    name_sel: &scraper::Selector,
    team: &str,
) -> Option<PlayerPerformance> {
    let position = find_in(row, position_sel).map(element_text)?;
    let name_el = find_in(row, name_sel)?;
    let name = element_text(name_el);
    if name.is_empty() {
        return None;
    }
    let tooltip = name_el.value().attr("title").unwrap_or_default();
    let grade = TOOLTIP_GRADE_RE
        .captures(tooltip)
        .and_then(|caps| caps[1].parse::<u32>().ok());
    Some(PlayerPerformance {
        team: team.to_string(),
        position,
        name,
        grade,
        goal: tooltip.contains("Goal:"),
        assist: tooltip.contains("Assist:"),
        booked: tooltip.contains("Booked"),
        injured: tooltip.contains("Injured"),
    })
}

fn parse_events(page: &Page) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    let mut impact_players: HashSet<String> = HashSet::new();
    let mut withheld_subs: Vec<(String, MatchEvent)> = Vec::new();

    for row in page.select(&page::EVENT_ROWS) {
        let minute = find_in(row, &page::EVENT_MINUTE)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| "?".to_string());
        let raw_desc = find_in(row, &page::EVENT_DESC)
            .map(element_text)
            .unwrap_or_default();
        let description = GRADE_TOKEN_RE.replace_all(&raw_desc, "").trim().to_string();

        let score_snapshot = cells_of(row)
            .get(2)
            .map(|cell| element_text(*cell))
            .filter(|t| !t.is_empty());

        let event = MatchEvent {
            minute,
            description: description.clone(),
            score_snapshot,
        };

        let lower = description.to_lowercase();
        if lower.contains("subbed in") || lower.contains("substituted") {
            withheld_subs.push((description, event));
            continue;
        }

        if IMPACT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            for word in description.split_whitespace() {
                if word.chars().next().is_some_and(char::is_uppercase) {
                    impact_players.insert(word.to_string());
                }
            }
        }
        events.push(event);
    }

    // Substitutions only make the cut when the player who came on also shows
    // up among the impactful names. The name extraction is crude by design:
    // it keys on the capitalized-token set, not a player identity.
    for (description, event) in withheld_subs {
        if let Some(name) = extract_sub_name(&description) {
            if impact_players.contains(&name) {
                events.push(event);
            }
        }
    }

    events
}

fn extract_sub_name(description: &str) -> Option<String> {
    SUB_NAME_RE
        .captures(description)
        .map(|caps| caps[1].trim().to_string())
}
