use std::fmt;

/// A scraped field that is either present or explicitly unavailable. The
/// extractors never raise on a missing source location; they record the gap
/// here and downstream formatting renders it as "N/A".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Present(String),
    Unavailable,
}

impl Field {
    pub fn from_text(text: Option<String>) -> Self {
        match text {
            Some(t) if !t.trim().is_empty() => Field::Present(t.trim().to_string()),
            _ => Field::Unavailable,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Field::Present(t) => t,
            Field::Unavailable => "N/A",
        }
    }

}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A match score cell; anything that does not parse as an integer is Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Score {
    Known(u32),
    Unknown,
}

impl Score {
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<u32>() {
            Ok(n) => Score::Known(n),
            Err(_) => Score::Unknown,
        }
    }

    pub fn value(self) -> Option<u32> {
        match self {
            Score::Known(n) => Some(n),
            Score::Unknown => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Known(n) => write!(f, "{n}"),
            Score::Unknown => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MotmWinner {
    Winner(String),
    Drawn,
    Unknown,
}

impl fmt::Display for MotmWinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotmWinner::Winner(name) => f.write_str(name),
            MotmWinner::Drawn => f.write_str("Match drawn, no MoTM winner"),
            MotmWinner::Unknown => f.write_str("N/A"),
        }
    }
}

/// One scraped match page, immutable after extraction.
#[derive(Debug, Clone)]
pub struct MatchRecord {
    pub home_team: Field,
    pub away_team: Field,
    pub home_score: Score,
    pub away_score: Score,
    pub round: Field,
    pub league: Field,
    pub venue: Field,
    pub referee: Field,
    pub motm_home: Field,
    pub motm_away: Field,
}

impl MatchRecord {
    /// Man of the match on the side with the strictly higher score; drawn
    /// matches have no winner and non-integer scores make it unknowable.
    pub fn motm_winner(&self) -> MotmWinner {
        match (self.home_score.value(), self.away_score.value()) {
            (Some(h), Some(a)) if h > a => {
                MotmWinner::Winner(self.motm_home.as_str().to_string())
            }
            (Some(h), Some(a)) if a > h => {
                MotmWinner::Winner(self.motm_away.as_str().to_string())
            }
            (Some(_), Some(_)) => MotmWinner::Drawn,
            _ => MotmWinner::Unknown,
        }
    }

    pub fn score_line(&self) -> String {
        format!(
            "{} {}-{} {}",
            self.home_team, self.home_score, self.away_score, self.away_team
        )
    }
}

/// One fielded player in one match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPerformance {
    pub team: String,
    pub position: String,
    pub name: String,
    pub grade: Option<u32>,
    pub goal: bool,
    pub assist: bool,
    pub booked: bool,
    pub injured: bool,
}

/// One match event row in page order. Substitution rows survive extraction
/// only when the substitute shows up in an impactful event elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    pub minute: String,
    pub description: String,
    pub score_snapshot: Option<String>,
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}' - {}", self.minute, self.description)?;
        if let Some(score) = &self.score_snapshot {
            write!(f, " (Score: {score})")?;
        }
        Ok(())
    }
}

/// One standings table row. All-or-nothing: a row with any unparseable
/// integer is dropped during extraction rather than kept partially filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsEntry {
    pub place: u32,
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
    pub points: i32,
}

/// An upcoming or recently played pairing located on a league page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub game_id: String,
}

/// One stat-leaderboard row (top scorers, assists, points, MVP votes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLeader {
    pub player: String,
    pub position: String,
    pub team: String,
    pub value_text: String,
    pub value_num: u32,
}

/// The two leagues the studio covers. League identity drives presentation
/// (labels, marquee billing) and the stats-page series index, never ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    Goondesliga,
    Spoondesliga,
}

impl League {
    pub const ALL: [League; 2] = [League::Goondesliga, League::Spoondesliga];

    pub fn keyword(self) -> &'static str {
        match self {
            League::Goondesliga => "goondesliga",
            League::Spoondesliga => "spoondesliga",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            League::Goondesliga => "The Goondesliga 🏆",
            League::Spoondesliga => "The Spoondesliga 🥄",
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            League::Goondesliga => "Goondesliga",
            League::Spoondesliga => "Spoondesliga",
        }
    }

    pub fn bottom_watch_label(self) -> &'static str {
        match self {
            League::Goondesliga => "📉 Relegation watch",
            League::Spoondesliga => "🪨 Rock Bottom Watch",
        }
    }

    pub fn is_marquee(self) -> bool {
        matches!(self, League::Goondesliga)
    }

    /// Series index (`Lnr`) on the shared stats page.
    pub fn stats_lnr(self) -> u32 {
        match self {
            League::Goondesliga => 1,
            League::Spoondesliga => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(home: Score, away: Score) -> MatchRecord {
        MatchRecord {
            home_team: Field::Present("Tigers FC".into()),
            away_team: Field::Present("Goon Squad".into()),
            home_score: home,
            away_score: away,
            round: Field::Unavailable,
            league: Field::Unavailable,
            venue: Field::Unavailable,
            referee: Field::Unavailable,
            motm_home: Field::Present("Archie Bunkler".into()),
            motm_away: Field::Present("Dmitri Spoonov".into()),
        }
    }

    #[test]
    fn motm_winner_follows_the_higher_score() {
        let r = record(Score::Known(3), Score::Known(1));
        assert_eq!(r.motm_winner(), MotmWinner::Winner("Archie Bunkler".into()));
        let r = record(Score::Known(0), Score::Known(2));
        assert_eq!(r.motm_winner(), MotmWinner::Winner("Dmitri Spoonov".into()));
    }

    #[test]
    fn motm_drawn_and_unknown_sentinels() {
        assert_eq!(
            record(Score::Known(1), Score::Known(1)).motm_winner(),
            MotmWinner::Drawn
        );
        assert_eq!(
            record(Score::Unknown, Score::Known(1)).motm_winner(),
            MotmWinner::Unknown
        );
    }

    #[test]
    fn unavailable_field_renders_as_na() {
        assert_eq!(Field::Unavailable.to_string(), "N/A");
        assert_eq!(Field::from_text(Some("  ".into())), Field::Unavailable);
        assert_eq!(
            Field::from_text(Some(" Tigers FC ".into())).as_str(),
            "Tigers FC"
        );
    }
}
