use once_cell::sync::Lazy;
use regex::Regex;

use crate::page::{self, Page, cells_of, element_text};
use crate::types::StatLeader;

static LEADING_INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)").expect("static regex"));

/// Leaderboard categories exposed by the shared stats page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCategory {
    Goals,
    Assists,
    Points,
    Mvp,
}

impl StatCategory {
    pub const ALL: [StatCategory; 4] = [
        StatCategory::Goals,
        StatCategory::Assists,
        StatCategory::Points,
        StatCategory::Mvp,
    ];

    /// Query-string series selector on the stats page.
    pub fn sel_code(self) -> &'static str {
        match self {
            StatCategory::Goals => "S",
            StatCategory::Assists => "A",
            StatCategory::Points => "P",
            StatCategory::Mvp => "X",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StatCategory::Goals => "Golden Boot 👟",
            StatCategory::Assists => "Assists 🎩🪄",
            StatCategory::Points => "Points 💎",
            StatCategory::Mvp => "MVP 🏅",
        }
    }
}

/// Parse the stats table and rank rows by their leading integer value,
/// highest first. Rows without a leading integer are skipped.
pub fn parse_stat_leaders(page: &Page) -> Vec<StatLeader> {
    let mut leaders = Vec::new();
    for row in page.select(&page::STATS_ROWS) {
        let cols = cells_of(row);
        if cols.len() < 5 {
            continue;
        }
        let value_text = element_text(cols[4]);
        let Some(value_num) = LEADING_INT_RE
            .captures(&value_text)
            .and_then(|caps| caps[1].parse::<u32>().ok())
        else {
            continue;
        };
        leaders.push(StatLeader {
            player: element_text(cols[1]),
            position: element_text(cols[2]),
            team: element_text(cols[3]),
            value_text,
            value_num,
        });
    }
    leaders.sort_by(|a, b| b.value_num.cmp(&a.value_num));
    leaders
}

pub fn format_leaders(leaders: &[StatLeader], top_n: usize) -> Vec<String> {
    leaders
        .iter()
        .take(top_n)
        .map(|l| format!("{}, {}, {} - {}", l.player, l.position, l.team, l.value_text))
        .collect()
}
