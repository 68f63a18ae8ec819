use std::env;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::alias::TeamAliasMap;
use crate::types::League;

/// Mentions that address the bot in chat, most specific first.
pub const BOT_ALIASES: &[&str] = &[
    "@taycan a. schitt",
    "@taycan a schitt",
    "@taycan",
    "@taycan a",
    "@taycan a.",
];

/// League id shared by both series on the stats page.
pub const STATS_LEAGUE_ID: u32 = 460905;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub chat_bot_id: String,
    pub generator_api_key: String,
    pub site_username: String,
    pub site_password: String,
    pub goondesliga_url: String,
    pub spoondesliga_url: String,
    pub listen_addr: String,
    pub profiles_path: String,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            chat_bot_id: required("GROUPME_BOT_ID")?,
            generator_api_key: required("GEMINI_API_KEY")?,
            site_username: required("X11_USERNAME")?,
            site_password: required("X11_PASSWORD")?,
            goondesliga_url: required("GOONDESLIGA_URL")?,
            spoondesliga_url: required("SPOONDESLIGA_URL")?,
            listen_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:10000".to_string()),
            profiles_path: env::var("PROFILES_PATH")
                .unwrap_or_else(|_| "profiles.json".to_string()),
        })
    }

    pub fn league_url(&self, league: League) -> &str {
        match league {
            League::Goondesliga => &self.goondesliga_url,
            League::Spoondesliga => &self.spoondesliga_url,
        }
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("missing required env var {key}"))
}

/// One community member's profile. Only the team identity matters here; the
/// file carries other fields we ignore.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamProfile {
    pub team: Option<String>,
    #[serde(default)]
    pub team_alias: Vec<String>,
}

/// Load the static profiles file, preserving file order so alias precedence
/// is deterministic (serde_json is built with `preserve_order`).
pub fn load_profiles(path: &Path) -> Result<Vec<TeamProfile>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read profiles file {}", path.display()))?;
    let entries: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&raw).context("profiles file is not a json object")?;
    entries
        .into_iter()
        .map(|(member, value)| {
            serde_json::from_value(value)
                .with_context(|| format!("invalid profile for {member}"))
        })
        .collect()
}

/// Build the read-only alias map: for each profile, the official team name is
/// inserted first, then its aliases, in file order. First insertion wins on
/// lookup, so earlier profiles shadow later ones.
pub fn build_alias_map(profiles: &[TeamProfile]) -> TeamAliasMap {
    let mut map = TeamAliasMap::new();
    for profile in profiles {
        let Some(team) = profile.team.as_deref() else {
            continue;
        };
        map.insert(team, team);
        for alias in &profile.team_alias {
            map.insert(alias, team);
        }
    }
    map
}
