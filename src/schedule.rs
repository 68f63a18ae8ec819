use std::collections::{HashMap, HashSet};

use crate::normalize::normalize;
use crate::types::{Fixture, League, StandingsEntry};

/// Output channels in billing order. The first slot is reserved for the
/// marquee matchup.
pub const CHANNELS: &[&str] = &["FSG", "FSG2", "FSG3", "FSG+", "FSG Radio 📻", "FSG Kids 🧸"];

pub const NO_FIXTURES: &str = "⚠️ No upcoming matches found.";

const SCHEDULE_HEADER: &str = "📺 FoxSportsGoon TV Kzhedule ⚽\n";
const MARQUEE_BANNER: &str = "🌟FSG Marquee Matchup🌟";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledFixture {
    pub pairing: String,
    pub stake: i32,
    pub league: League,
}

#[derive(Debug, Clone)]
pub struct TvSchedule {
    pub marquee: Option<ScheduledFixture>,
    pub slots: Vec<(&'static str, ScheduledFixture)>,
}

/// Rank fixtures across both leagues by combined standings points and assign
/// them to channels. The top-ranked marquee-league fixture, if one exists, is
/// pinned to the first channel; everything else fills the remaining channels
/// in stake order, and overflow is dropped. Zero fixtures yields None, which
/// renders as the no-fixtures sentinel rather than an empty listing.
pub fn schedule(
    fixtures: &[(League, Fixture)],
    standings: &[StandingsEntry],
) -> Option<TvSchedule> {
    let points_by_team: HashMap<String, i32> = standings
        .iter()
        .map(|entry| (normalize(&entry.team), entry.points))
        .collect();

    let mut ranked: Vec<ScheduledFixture> = fixtures
        .iter()
        .map(|(league, fixture)| {
            let home_points = points_by_team
                .get(&normalize(&fixture.home_team))
                .copied()
                .unwrap_or(0);
            let away_points = points_by_team
                .get(&normalize(&fixture.away_team))
                .copied()
                .unwrap_or(0);
            ScheduledFixture {
                pairing: format!("{} vs {}", fixture.home_team, fixture.away_team),
                stake: home_points + away_points,
                league: *league,
            }
        })
        .collect();
    if ranked.is_empty() {
        return None;
    }
    // Stable sort keeps page order among equal stakes.
    ranked.sort_by_key(|f| -f.stake);

    let marquee = ranked.iter().find(|f| f.league.is_marquee()).cloned();

    let mut used: HashSet<String> = HashSet::new();
    if let Some(m) = &marquee {
        used.insert(m.pairing.clone());
    }

    let mut slots = Vec::new();
    let mut channel = 1;
    for fixture in ranked {
        if used.contains(&fixture.pairing) || channel >= CHANNELS.len() {
            continue;
        }
        used.insert(fixture.pairing.clone());
        slots.push((CHANNELS[channel], fixture));
        channel += 1;
    }

    Some(TvSchedule { marquee, slots })
}

/// Render the chat message for a schedule, or the sentinel when there are no
/// upcoming fixtures at all.
pub fn render(schedule: Option<&TvSchedule>) -> String {
    let Some(schedule) = schedule else {
        return NO_FIXTURES.to_string();
    };

    let mut lines = vec![SCHEDULE_HEADER.to_string()];
    if let Some(marquee) = &schedule.marquee {
        lines.push(MARQUEE_BANNER.to_string());
        lines.push(marquee.pairing.clone());
        lines.push(String::new());
    }
    for (channel, fixture) in &schedule.slots {
        lines.push((*channel).to_string());
        lines.push(fixture.pairing.clone());
        lines.push(String::new());
    }
    lines.join("\n")
}
