use fsg_studio::alias::TeamAliasMap;
use fsg_studio::commands::{Command, InboundMessage, parse_command};
use fsg_studio::stats_page::StatCategory;
use fsg_studio::types::League;

fn aliases() -> TeamAliasMap {
    let mut map = TeamAliasMap::new();
    map.insert("Tigers FC", "Tigers FC");
    map.insert("tigers", "Tigers FC");
    map.insert("Sofa Kings", "Sofa Kings");
    map.insert("sofa", "Sofa Kings");
    map
}

fn message(text: &str) -> InboundMessage {
    InboundMessage {
        text: text.to_string(),
        sender_type: "user".to_string(),
    }
}

#[test]
fn bot_messages_are_ignored() {
    let msg = InboundMessage {
        text: "@taycan recap goondesliga".to_string(),
        sender_type: "bot".to_string(),
    };
    assert_eq!(parse_command(&msg, &aliases()), None);
}

#[test]
fn messages_without_a_bot_mention_are_ignored() {
    assert_eq!(
        parse_command(&message("recap goondesliga please"), &aliases()),
        None
    );
}

#[test]
fn league_recap_routes_by_league_keyword() {
    assert_eq!(
        parse_command(&message("@Taycan gimme an UPDATE on the Goondesliga"), &aliases()),
        Some(Command::LeagueRecap(League::Goondesliga))
    );
    assert_eq!(
        parse_command(&message("@taycan recap spoondesliga"), &aliases()),
        Some(Command::LeagueRecap(League::Spoondesliga))
    );
}

#[test]
fn team_recap_resolves_aliases_in_free_text() {
    assert_eq!(
        parse_command(&message("@taycan recap the tigers game!"), &aliases()),
        Some(Command::TeamRecap("Tigers FC".to_string()))
    );
    // A recap mention without a resolvable team is a no-op.
    assert_eq!(
        parse_command(&message("@taycan highlight the llamas"), &aliases()),
        None
    );
}

#[test]
fn tv_schedule_triggers() {
    assert_eq!(
        parse_command(&message("@taycan what's on FSG tonight? any games?"), &aliases()),
        Some(Command::TvSchedule)
    );
    assert_eq!(
        parse_command(&message("@taycan show me the tv kzhedule"), &aliases()),
        Some(Command::TvSchedule)
    );
}

#[test]
fn preview_resolves_team_when_it_can() {
    assert_eq!(
        parse_command(&message("@taycan preview the sofa kings match"), &aliases()),
        Some(Command::MatchPreview(Some("Sofa Kings".to_string())))
    );
    assert_eq!(
        parse_command(&message("@taycan preview the llamas match"), &aliases()),
        Some(Command::MatchPreview(None))
    );
}

#[test]
fn leaderboard_routes_league_and_category() {
    assert_eq!(
        parse_command(
            &message("@taycan who's winning the golden boot in the spoon league"),
            &aliases()
        ),
        Some(Command::Leaderboard {
            league: League::Spoondesliga,
            category: Some(StatCategory::Goals),
        })
    );
    assert_eq!(
        parse_command(&message("@taycan mvp race?"), &aliases()),
        Some(Command::Leaderboard {
            league: League::Goondesliga,
            category: Some(StatCategory::Mvp),
        })
    );
    assert_eq!(
        parse_command(&message("@taycan league leaders"), &aliases()),
        Some(Command::Leaderboard {
            league: League::Goondesliga,
            category: None,
        })
    );
}

#[test]
fn unmatched_text_is_a_no_op() {
    assert_eq!(parse_command(&message("@taycan hello there"), &aliases()), None);
}
