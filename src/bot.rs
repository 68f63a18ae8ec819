use anyhow::Result;

use crate::alias::TeamAliasMap;
use crate::annotate::annotate;
use crate::chat::{ChatClient, PRE_CAP, clip};
use crate::commands::{Command, InboundMessage, parse_command};
use crate::config::{BotConfig, STATS_LEAGUE_ID};
use crate::generator::Generator;
use crate::league_page;
use crate::match_page::{self, MatchExtract};
use crate::normalize::normalize;
use crate::prompt::{self, LastMatch};
use crate::schedule;
use crate::session::{self, Session};
use crate::standings;
use crate::stats_page::{self, StatCategory};
use crate::types::{Fixture, League, PlayerPerformance, StandingsEntry};

const LOGIN_APOLOGY: &str = "⚠️ Failed to log in to Xpert Eleven to fetch match data.";
const LOGIN_APOLOGY_SHORT: &str = "⚠️ I couldn't log in to Xpert Eleven.";
const NO_RECENT_MATCHES: &str = "Sorry, I couldn't find any recent matches in that league.";
const UNKNOWN_TEAM: &str = "Ay yo, who?? I ain't never heard of that team.";
const NO_FORM_INFO: &str = "Sorry, couldn't find any recent match info for either team.";

/// The studio. Owns the immutable configuration, the read-only alias map and
/// the outbound clients; every request runs the same strictly sequential
/// fetch → extract → transform → generate → annotate → send chain, and every
/// failure degrades to a message the chat still receives.
pub struct Bot {
    config: BotConfig,
    aliases: TeamAliasMap,
    generator: Generator,
    chat: ChatClient,
}

impl Bot {
    pub fn new(config: BotConfig, aliases: TeamAliasMap) -> Self {
        let generator = Generator::new(config.generator_api_key.clone());
        let chat = ChatClient::new(config.chat_bot_id.clone());
        Self {
            config,
            aliases,
            generator,
            chat,
        }
    }

    /// Entry point for the webhook: route and dispatch. Nothing here returns
    /// an error; the caller always answers 200.
    pub fn handle_webhook(&self, message: &InboundMessage) {
        let Some(command) = parse_command(message, &self.aliases) else {
            return;
        };
        log::info!("dispatching {command:?}");
        match command {
            Command::LeagueRecap(league) => self.league_recap(league),
            Command::TeamRecap(team) => self.team_recap(&team),
            Command::TvSchedule => self.tv_schedule(true),
            Command::MatchPreview(team) => self.match_preview(team.as_deref()),
            Command::Leaderboard { league, category } => self.leaderboard(league, category),
        }
    }

    /// The on-demand `/tv` push: schedule only, no banter.
    pub fn manual_tv(&self) {
        match Session::login(&self.config.site_username, &self.config.site_password) {
            Ok(session) => self.send_tv_schedule(&session),
            Err(err) => {
                log::warn!("login failed: {err:#}");
                self.chat.send("⚠️ Couldn't log in to X11");
            }
        }
    }

    fn league_recap(&self, league: League) {
        self.chat.send(&format!(
            "Alright y'all! Taycan A. giving you an update on the {}...",
            league.short_name()
        ));

        let matches = self.recent_results(league);
        if matches.is_empty() {
            self.chat.send(NO_RECENT_MATCHES);
            return;
        }

        let session =
            match Session::login(&self.config.site_username, &self.config.site_password) {
                Ok(session) => session,
                Err(err) => {
                    log::warn!("login failed: {err:#}");
                    self.chat.send(LOGIN_APOLOGY);
                    return;
                }
            };

        let mut score_lines = Vec::new();
        let mut top_performers = Vec::new();
        for fixture in &matches {
            let extract = match self.fetch_match(&session, &fixture.game_id) {
                Ok(extract) => extract,
                Err(err) => {
                    log::warn!("match page {} unavailable: {err:#}", fixture.game_id);
                    continue;
                }
            };
            score_lines.push(extract.record.score_line());
            if let Some(star) = top_performer(&extract.performances) {
                top_performers.push(star);
            }
        }

        let standings = self.league_standings(&session, league);
        let standings_summary = standings::summary(&standings, league);

        let top_lines: Vec<String> = top_performers
            .iter()
            .take(3)
            .map(|p| format!("- {p}"))
            .collect();
        let final_message = format!(
            "{}\n\n⚽ Match Results:\n{}\n\n📊 Top Performers:\n{}\n\n📈 Standings Update:\n{}",
            league.display_name(),
            score_lines.join("\n"),
            top_lines.join("\n"),
            standings_summary,
        );
        self.chat.send(&clip(&final_message, PRE_CAP));
    }

    fn team_recap(&self, team: &str) {
        let wanted = normalize(team);
        for league in League::ALL {
            for fixture in self.recent_results(league) {
                if normalize(&fixture.home_team) == wanted
                    || normalize(&fixture.away_team) == wanted
                {
                    let summary = self.summarize_game(&fixture.game_id);
                    self.chat.send(&summary);
                    return;
                }
            }
        }
        log::info!("no recent match found for {team}");
    }

    /// Fetch, extract, generate and annotate one match summary. Always comes
    /// back with something sendable; failures become bracketed sentinels.
    fn summarize_game(&self, game_id: &str) -> String {
        let session =
            match Session::login(&self.config.site_username, &self.config.site_password) {
                Ok(session) => session,
                Err(err) => {
                    log::warn!("login failed: {err:#}");
                    return "[Login to Xpert Eleven failed.]".to_string();
                }
            };
        let extract = match self.fetch_match(&session, game_id) {
            Ok(extract) => extract,
            Err(err) => {
                log::warn!("match page {game_id} unavailable: {err:#}");
                return "[Failed to retrieve match page.]".to_string();
            }
        };
        let prompt =
            prompt::recap_prompt(&extract.record, &extract.events, &extract.performances);
        let summary = self.generator.generate(&prompt);
        annotate(&summary, &extract.performances)
    }

    fn tv_schedule(&self, with_intro: bool) {
        if with_intro {
            self.chat
                .send("Ay y'all! Here's what's coming up on FoxSportsGoon...");
        }
        match Session::login(&self.config.site_username, &self.config.site_password) {
            Ok(session) => self.send_tv_schedule(&session),
            Err(err) => {
                log::warn!("login failed: {err:#}");
                self.chat.send(LOGIN_APOLOGY_SHORT);
            }
        }
    }

    fn send_tv_schedule(&self, session: &Session) {
        let mut all_standings = Vec::new();
        let mut fixtures = Vec::new();
        for league in League::ALL {
            match session.get_page(self.config.league_url(league)) {
                Ok(page) => {
                    all_standings.extend(league_page::parse_standings(&page));
                    fixtures.extend(
                        league_page::parse_upcoming(&page)
                            .into_iter()
                            .map(|fixture| (league, fixture)),
                    );
                }
                Err(err) => log::warn!("{} page unavailable: {err:#}", league.short_name()),
            }
        }
        let tv = schedule::schedule(&fixtures, &all_standings);
        self.chat.send(&schedule::render(tv.as_ref()));
    }

    fn match_preview(&self, team: Option<&str>) {
        self.chat
            .send("Preview? We talkin' 'bout previews? Jk y'all, let's get it...");
        let Some(team) = team else {
            self.chat.send(UNKNOWN_TEAM);
            return;
        };

        let session =
            match Session::login(&self.config.site_username, &self.config.site_password) {
                Ok(session) => session,
                Err(err) => {
                    log::warn!("login failed: {err:#}");
                    self.chat.send(LOGIN_APOLOGY);
                    return;
                }
            };

        let mut all_standings = Vec::new();
        let mut upcoming = Vec::new();
        for league in League::ALL {
            match session.get_page(self.config.league_url(league)) {
                Ok(page) => {
                    all_standings.extend(league_page::parse_standings(&page));
                    upcoming.extend(league_page::parse_upcoming(&page));
                }
                Err(err) => log::warn!("{} page unavailable: {err:#}", league.short_name()),
            }
        }

        let wanted = normalize(team);
        let Some(fixture) = upcoming.iter().find(|f| {
            normalize(&f.home_team) == wanted || normalize(&f.away_team) == wanted
        }) else {
            self.chat.send(&format!(
                "Hold on now...stay off the taaaaaar! {team} has a bye."
            ));
            return;
        };

        let home_standing = self.find_team_standing(&fixture.home_team, &all_standings);
        let away_standing = self.find_team_standing(&fixture.away_team, &all_standings);

        let home_last = self.last_match_for(
            &session,
            &fixture.home_team,
            home_standing.map(|s| s.team.as_str()),
        );
        let away_last = self.last_match_for(
            &session,
            &fixture.away_team,
            away_standing.map(|s| s.team.as_str()),
        );
        if home_last.is_none() && away_last.is_none() {
            self.chat.send(NO_FORM_INFO);
            return;
        }

        let prompt = prompt::preview_prompt(
            home_standing,
            away_standing,
            &fixture.home_team,
            &fixture.away_team,
            home_last.as_ref(),
            away_last.as_ref(),
        );
        let preview = self.generator.generate(&prompt);

        let mut key_players: Vec<PlayerPerformance> = Vec::new();
        for last in [&home_last, &away_last].into_iter().flatten() {
            key_players.extend(last.performances.iter().cloned());
        }
        let annotated = annotate(&preview, &key_players);
        self.chat.send(&clip(&annotated, PRE_CAP));
    }

    fn leaderboard(&self, league: League, category: Option<StatCategory>) {
        self.chat
            .send("Yo these dudes ain't my 🐐 Dougie Maradonut but...");
        let session =
            match Session::login(&self.config.site_username, &self.config.site_password) {
                Ok(session) => session,
                Err(err) => {
                    log::warn!("login failed: {err:#}");
                    self.chat.send(LOGIN_APOLOGY_SHORT);
                    return;
                }
            };

        if let Some(category) = category {
            let leaders = self.stat_leaders(&session, league, category, 5);
            if leaders.is_empty() {
                self.chat.send(&format!(
                    "Couldn't fetch {} leaderboard right now yo",
                    category.title()
                ));
                return;
            }
            let mut message =
                format!("{} Leaders ({}):\n\n", category.title(), league.short_name());
            for (rank, line) in leaders.iter().enumerate() {
                message.push_str(&format!("{}. {}\n", rank + 1, line));
            }
            self.chat.send(message.trim());
            return;
        }

        // No specific category: one-line summary per board.
        let mut message = format!("{} Leaders:\n\n", league.short_name());
        for category in StatCategory::ALL {
            let leaders = self.stat_leaders(&session, league, category, 1);
            if let Some(line) = leaders.first() {
                message.push_str(&format!("{}\n{}\n\n", category.title(), line));
            }
        }
        self.chat.send(message.trim());
    }

    fn stat_leaders(
        &self,
        session: &Session,
        league: League,
        category: StatCategory,
        top_n: usize,
    ) -> Vec<String> {
        let url = session::stats_url(STATS_LEAGUE_ID, category.sel_code(), league.stats_lnr());
        match session.get_page(&url) {
            Ok(page) => stats_page::format_leaders(&stats_page::parse_stat_leaders(&page), top_n),
            Err(err) => {
                log::warn!("stats page unavailable: {err:#}");
                Vec::new()
            }
        }
    }

    /// Recently played fixtures on a league page. The listing is public, so
    /// this does not need the logged-in session; failures read as "no
    /// matches" and the caller apologizes accordingly.
    fn recent_results(&self, league: League) -> Vec<Fixture> {
        match session::fetch_public_page(self.config.league_url(league)) {
            Ok(page) => league_page::parse_results(&page),
            Err(err) => {
                log::warn!("{} results unavailable: {err:#}", league.short_name());
                Vec::new()
            }
        }
    }

    fn league_standings(&self, session: &Session, league: League) -> Vec<StandingsEntry> {
        match session.get_page(self.config.league_url(league)) {
            Ok(page) => league_page::parse_standings(&page),
            Err(err) => {
                log::warn!("{} standings unavailable: {err:#}", league.short_name());
                Vec::new()
            }
        }
    }

    fn fetch_match(&self, session: &Session, game_id: &str) -> Result<MatchExtract> {
        let page = session.get_page(&session::match_url(game_id))?;
        Ok(match_page::extract_match(&page))
    }

    fn find_team_standing<'a>(
        &self,
        team: &str,
        standings: &'a [StandingsEntry],
    ) -> Option<&'a StandingsEntry> {
        let official = self.aliases.resolve(team).unwrap_or(team);
        let wanted = normalize(official);
        standings.iter().find(|entry| normalize(&entry.team) == wanted)
    }

    /// A team's most recent outing: scan both leagues' result listings for
    /// the first fixture involving the team, then pull its match page. The
    /// performances are filtered down to the team's own players.
    fn last_match_for(
        &self,
        session: &Session,
        team: &str,
        official_name: Option<&str>,
    ) -> Option<LastMatch> {
        let wanted = normalize(team);
        let fixture = League::ALL.into_iter().find_map(|league| {
            self.recent_results(league).into_iter().find(|f| {
                normalize(&f.home_team) == wanted || normalize(&f.away_team) == wanted
            })
        })?;

        let extract = match self.fetch_match(session, &fixture.game_id) {
            Ok(extract) => extract,
            Err(err) => {
                log::warn!("match page {} unavailable: {err:#}", fixture.game_id);
                return None;
            }
        };
        let filter_name = official_name.unwrap_or(team);
        let performances: Vec<PlayerPerformance> = extract
            .performances
            .iter()
            .filter(|p| p.team == filter_name)
            .cloned()
            .collect();
        Some(LastMatch {
            record: extract.record,
            performances,
        })
    }
}

fn top_performer(performances: &[PlayerPerformance]) -> Option<String> {
    performances
        .iter()
        .filter_map(|p| p.grade.map(|grade| (grade, p)))
        .max_by_key(|(grade, _)| *grade)
        .map(|(grade, p)| format!("{} ({}, {grade} 📊, {})", p.name, p.position, p.team))
}
