pub mod config;
pub mod leaderboard;
pub mod message;
pub mod slack;

use chrono::{Datelike, Utc};

pub type Error = Box<dyn std::error::Error + Send + Sync>;

const USER_AGENT: &str = "aoc-slack-leaderboard";
const HTTP_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

fn app() -> Result<(), Error> {
    let config = config::Config::from_env()?;

    let http = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(HTTP_TIMEOUT)
        .build()?;

    // Year and day-of-month derive from the same instant so the day gate and
    // the unlock baseline agree.
    let now = Utc::now();
    let year = now.year();
    let day = now.day();

    let board = leaderboard::fetch(&http, &config, year)?;
    log::info!("fetched leaderboard with {} members", board.members.len());

    let ranking = leaderboard::rank_members(&board.members);
    let completions = leaderboard::daily_completions(&board.members, day);

    let url = leaderboard::leaderboard_url(year, &config.leaderboard_id);
    let text = message::build_message(&ranking, &completions, &url, year, day)?;

    slack::post_message(&http, &config.slack_webhook, &text);

    Ok(())
}

pub fn main() {
    env_logger::init();

    if let Err(e) = app() {
        println!("{}", e);
        std::process::exit(1);
    }
}
