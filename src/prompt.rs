use crate::types::{MatchEvent, MatchRecord, PlayerPerformance, StandingsEntry};

const REFEREE_KEYWORDS: &[&str] = &["yellow card", "red card", "penalty", "disallowed goal"];

/// A team's most recent outing, used as form context in previews.
#[derive(Debug, Clone)]
pub struct LastMatch {
    pub record: MatchRecord,
    pub performances: Vec<PlayerPerformance>,
}

/// Instruction block for the post-match recap. Player grades ride along as
/// context only; the annotation pass stamps them onto the final text, so the
/// generator is told to keep names plain.
pub fn recap_prompt(
    record: &MatchRecord,
    events: &[MatchEvent],
    performances: &[PlayerPerformance],
) -> String {
    let events_text = if events.is_empty() {
        "No event data available.".to_string()
    } else {
        events
            .iter()
            .map(MatchEvent::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    };

    let referee_events: Vec<String> = events
        .iter()
        .filter(|event| {
            let lower = event.description.to_lowercase();
            REFEREE_KEYWORDS.iter().any(|kw| lower.contains(kw))
        })
        .map(MatchEvent::to_string)
        .collect();
    let referee_events_text = if referee_events.is_empty() {
        "No significant referee interventions.".to_string()
    } else {
        referee_events.join("\n")
    };

    let ratings_lines: Vec<String> = performances
        .iter()
        .filter_map(|p| {
            let grade = p.grade?;
            Some(format!("{} ({}, {} 📊)", p.name, p.position, grade))
        })
        .collect();
    let ratings_text = if ratings_lines.is_empty() {
        "No player ratings available.".to_string()
    } else {
        ratings_lines.join("\n")
    };

    format!(
        "You are Taycan A. Schitt, a studio TV analyst for soccer channel FoxSportsGoon. \
         You give exciting post-match recaps focusing on key match events.\n\n\
         Describe goals in detail.\n\
         Include who was the man of the match for the winning team.\n\
         Keep it short and exciting, as if you were presenting highlights on TV. \
         Speak about the events in the past tense and highlight shifts in momentum and drama.\n\
         Refer to the timing of moments using phrases like 'in the 36th minute', \
         'just before halftime', 'early in the second half', etc.\n\
         Use full player names, but write them plain: do not attach grades, ratings \
         or rating scales like 8/10 to any player.\n\n\
         Match: {home} vs {away}\n\
         Score: {home_score} - {away_score}\n\n\
         Match Events:\n{events_text}\n\n\
         Referee: {referee}\n\
         Referee-related events:\n{referee_events_text}\n\n\
         Player grades (context only, keep them out of your text):\n{ratings_text}\n",
        home = record.home_team,
        away = record.away_team,
        home_score = record.home_score,
        away_score = record.away_score,
        referee = record.referee,
    )
}

/// Instruction block for an upcoming-match preview built from standings and
/// each side's most recent outing. Either last match may be missing (bye
/// rounds); the generator is told to lean on standings alone in that case.
pub fn preview_prompt(
    home_standing: Option<&StandingsEntry>,
    away_standing: Option<&StandingsEntry>,
    home_team: &str,
    away_team: &str,
    home_last: Option<&LastMatch>,
    away_last: Option<&LastMatch>,
) -> String {
    let mut prompt = String::from(
        "You are Taycan A. Schitt, a studio TV analyst for FoxSportsGoon. \
         You provide exciting, insightful match previews for upcoming soccer games.\n\n\
         ALWAYS keep your previews between 990-1000 characters. NEVER go above 1000.\n\
         Use the current league standings (place, wins, draws, losses, goals for, \
         goals against, goal difference, and points) as context for your analysis.\n\
         Include recent form based on the last match result and key player performances.\n\
         Make predictions and build excitement for the upcoming game.\n\
         Use full player names, but write them plain: do not attach grades or ratings.\n\
         Keep it engaging as a TV preview.\n\n\
         If a team has no recent match, they had a bye round, just use standings \
         in your analysis for them.\n\n",
    );

    push_team_block(&mut prompt, "Team 1", home_team, home_standing, home_last);
    prompt.push('\n');
    push_team_block(&mut prompt, "Team 2", away_team, away_standing, away_last);

    prompt.push_str("\nGenerate a lively and insightful match preview considering the above.\n");
    prompt.trim().to_string()
}

fn push_team_block(
    prompt: &mut String,
    label: &str,
    team: &str,
    standing: Option<&StandingsEntry>,
    last: Option<&LastMatch>,
) {
    match standing {
        Some(s) => prompt.push_str(&format!(
            "{label}: {team}\n\
             Place: {place}, W-D-L: {wins}-{draws}-{losses}, \
             GF-GA-Diff: {gf}-{ga}-{diff}, Points: {points}\n",
            team = s.team,
            place = s.place,
            wins = s.wins,
            draws = s.draws,
            losses = s.losses,
            gf = s.goals_for,
            ga = s.goals_against,
            diff = s.goal_difference,
            points = s.points,
        )),
        None => prompt.push_str(&format!("{label}: {team}\nNo standings available.\n")),
    }

    if let Some(last) = last {
        prompt.push_str(&format!(
            "Last match result: {home} {hs}-{as_} {away}\nKey players and ratings:\n",
            home = last.record.home_team,
            hs = last.record.home_score,
            as_ = last.record.away_score,
            away = last.record.away_team,
        ));
        for p in &last.performances {
            let grade = p
                .grade
                .map(|g| g.to_string())
                .unwrap_or_else(|| "unrated".to_string());
            prompt.push_str(&format!("- {} ({}, {} 📊)\n", p.name, p.position, grade));
        }
    }
}
