pub mod alias;
pub mod annotate;
pub mod bot;
pub mod chat;
pub mod commands;
pub mod config;
pub mod generator;
pub mod http_client;
pub mod league_page;
pub mod match_page;
pub mod normalize;
pub mod page;
pub mod prompt;
pub mod schedule;
pub mod server;
pub mod session;
pub mod standings;
pub mod stats_page;
pub mod types;
