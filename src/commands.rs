use serde::Deserialize;

use crate::alias::TeamAliasMap;
use crate::config::BOT_ALIASES;
use crate::stats_page::StatCategory;
use crate::types::League;

/// Inbound webhook payload. The chat service sends more fields; only these
/// two drive routing.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMessage {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub sender_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LeagueRecap(League),
    TeamRecap(String),
    TvSchedule,
    /// Preview was requested; None means the team mention didn't resolve.
    MatchPreview(Option<String>),
    Leaderboard {
        league: League,
        category: Option<StatCategory>,
    },
}

const TV_TRIGGERS: &[&str] = &["tv", "on", "kzhedule", "schedule", "guide", "games"];
const LEADERBOARD_TRIGGERS: &[&str] = &[
    "golden boot",
    "goals",
    "top scorers",
    "assists",
    "points",
    "x11",
    "mvp",
    "league leaders",
];

/// Route an inbound message to a command. Matching is case-insensitive
/// substring testing, rules are tried in a fixed order and the first hit
/// wins. Bot-authored messages are dropped outright to prevent feedback
/// loops; anything unmatched is a no-op.
pub fn parse_command(message: &InboundMessage, aliases: &TeamAliasMap) -> Option<Command> {
    if message.sender_type == "bot" {
        return None;
    }
    let lower = message.text.to_lowercase();
    if !BOT_ALIASES.iter().any(|alias| lower.contains(alias)) {
        return None;
    }

    // 1. League recap/update.
    if lower.contains("recap") || lower.contains("update") {
        if let Some(league) = mentioned_league(&lower) {
            return Some(Command::LeagueRecap(league));
        }
    }

    // 2. Team highlight/recap. An unresolvable team mention is a no-op.
    if lower.contains("highlight") || lower.contains("recap") {
        return aliases
            .resolve(&message.text)
            .map(|team| Command::TeamRecap(team.to_string()));
    }

    // 3. TV schedule.
    if (lower.contains("fsg") || lower.contains("tv"))
        && TV_TRIGGERS.iter().any(|kw| lower.contains(kw))
    {
        return Some(Command::TvSchedule);
    }

    // 4. Match preview. The bot answers even when the team doesn't resolve.
    if lower.contains("preview") {
        return Some(Command::MatchPreview(
            aliases.resolve(&message.text).map(str::to_string),
        ));
    }

    // 5. Stat leaderboards.
    if LEADERBOARD_TRIGGERS.iter().any(|kw| lower.contains(kw)) {
        let league = if lower.contains("spoon") {
            League::Spoondesliga
        } else {
            League::Goondesliga
        };
        return Some(Command::Leaderboard {
            league,
            category: mentioned_category(&lower),
        });
    }

    None
}

fn mentioned_league(lower: &str) -> Option<League> {
    League::ALL
        .into_iter()
        .find(|league| lower.contains(league.keyword()))
}

fn mentioned_category(lower: &str) -> Option<StatCategory> {
    if lower.contains("golden boot") || lower.contains("goals") || lower.contains("top scorers") {
        Some(StatCategory::Goals)
    } else if lower.contains("assists") {
        Some(StatCategory::Assists)
    } else if lower.contains("points") {
        Some(StatCategory::Points)
    } else if lower.contains("x11") || lower.contains("mvp") {
        Some(StatCategory::Mvp)
    } else {
        None
    }
}
