use crate::types::{League, StandingsEntry};

pub const MISSING_STANDINGS: &str = "Standings data is missing.";

/// Points the hunt pack may trail the leader by, and the bottom-watch spread
/// above the sixth-placed team.
const BAND_MARGIN: i32 = 4;
/// Bottom watch only exists once this many teams are ranked.
const BOTTOM_WATCH_MIN: usize = 6;

/// Deterministic table order: points, then goal difference, then team name.
/// The alphabetical fallback makes the order total for any input.
pub fn rank(mut entries: Vec<StandingsEntry>) -> Vec<StandingsEntry> {
    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| a.team.cmp(&b.team))
    });
    entries
}

/// Competitive bands over a ranked table.
#[derive(Debug)]
pub struct Bands<'a> {
    pub leader: &'a StandingsEntry,
    pub hunt_pack: Vec<&'a StandingsEntry>,
    pub bottom_watch: Vec<&'a StandingsEntry>,
}

/// Classify a ranked table. Returns None for an empty table; fewer than six
/// entries just leaves the bottom watch empty.
pub fn classify(ranked: &[StandingsEntry]) -> Option<Bands<'_>> {
    let leader = ranked.first()?;

    let hunt_pack = ranked[1..]
        .iter()
        .filter(|team| leader.points - team.points <= BAND_MARGIN)
        .collect();

    let mut bottom_watch = Vec::new();
    if ranked.len() >= BOTTOM_WATCH_MIN {
        let baseline = ranked[BOTTOM_WATCH_MIN - 1].points;
        bottom_watch = ranked[BOTTOM_WATCH_MIN - 1..]
            .iter()
            .filter(|team| team.points <= baseline + BAND_MARGIN)
            .collect();
    }

    Some(Bands {
        leader,
        hunt_pack,
        bottom_watch,
    })
}

/// Render the standings update the studio posts to chat.
pub fn summary(entries: &[StandingsEntry], league: League) -> String {
    let ranked = rank(entries.to_vec());
    let Some(bands) = classify(&ranked) else {
        return MISSING_STANDINGS.to_string();
    };

    let mut out = format!(
        "🏆 {} lead the league with {} points.\n\n",
        bands.leader.team, bands.leader.points
    );

    if !bands.hunt_pack.is_empty() {
        let pack: Vec<String> = bands
            .hunt_pack
            .iter()
            .map(|team| format!("{} ({} pts)", team.team, team.points))
            .collect();
        out.push_str(&format!("⚔️ In the Hunt: {}\n", pack.join(", ")));
    }

    if !bands.bottom_watch.is_empty() {
        let watch: Vec<String> = bands
            .bottom_watch
            .iter()
            .map(|team| format!("{} ({} pts)", team.team, team.points))
            .collect();
        out.push_str(&format!(
            "\n{}: {}",
            league.bottom_watch_label(),
            watch.join(", ")
        ));
    }

    out.trim().to_string()
}
