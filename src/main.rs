use std::path::Path;

use anyhow::Result;

use fsg_studio::bot::Bot;
use fsg_studio::config::{self, BotConfig};
use fsg_studio::server;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = BotConfig::from_env()?;
    let profiles = config::load_profiles(Path::new(&config.profiles_path))?;
    let aliases = config::build_alias_map(&profiles);
    log::info!(
        "loaded {} profiles, {} alias entries",
        profiles.len(),
        aliases.len()
    );

    let addr = config.listen_addr.clone();
    let bot = Bot::new(config, aliases);
    server::run(&addr, &bot)
}
