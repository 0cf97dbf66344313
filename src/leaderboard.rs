use crate::{config::Config, Error};

use reqwest::header;
use serde::Deserialize;
use std::collections::HashMap;

/// Top level of the private leaderboard JSON. Only the fields we render are
/// modeled; everything else in the response is ignored.
#[derive(Debug, Deserialize)]
pub struct Leaderboard {
    pub members: HashMap<String, Member>,
}

#[derive(Debug, Deserialize)]
pub struct Member {
    pub name: String,
    pub local_score: u64,
    pub stars: u32,
    /// Day number (unpadded, e.g. "9") -> part ("1"/"2") -> star timestamp.
    #[serde(default)]
    pub completion_day_level: HashMap<String, HashMap<String, StarEntry>>,
}

#[derive(Debug, Deserialize)]
pub struct StarEntry {
    pub get_star_ts: i64,
}

/// A member's place in the overall ranking.
#[derive(Debug, PartialEq)]
pub struct RankedMember {
    pub name: String,
    pub score: u64,
    pub stars: u32,
}

/// A member's progress on a single day. Part 1 is required for inclusion;
/// part 2 may still be open.
#[derive(Debug, PartialEq)]
pub struct DailyCompletion {
    pub name: String,
    pub first_star_ts: i64,
    pub second_star_ts: Option<i64>,
}

pub fn leaderboard_url(year: i32, leaderboard_id: &str) -> String {
    format!(
        "https://adventofcode.com/{}/leaderboard/private/view/{}",
        year, leaderboard_id
    )
}

/// Retrieves the leaderboard, authenticating with the AoC session cookie.
/// Anything other than a 200 is fatal; there is no retry.
pub fn fetch(
    http: &reqwest::blocking::Client,
    config: &Config,
    year: i32,
) -> Result<Leaderboard, Error> {
    let url = format!("{}.json", leaderboard_url(year, &config.leaderboard_id));
    log::info!("fetching {}", url);

    let response = http
        .get(&url)
        .header(header::COOKIE, format!("session={}", config.session_id))
        .send()?;

    if response.status() != reqwest::StatusCode::OK {
        log::warn!("leaderboard fetch returned {}", response.status());
        return Err("Error retrieving leaderboard".into());
    }

    Ok(response.json()?)
}

/// Sorts members by score descending, stars as tie-break. The sort is stable;
/// exact ties keep whatever order the map iteration produced.
pub fn rank_members(members: &HashMap<String, Member>) -> Vec<RankedMember> {
    let mut ranking: Vec<RankedMember> = members
        .values()
        .map(|m| RankedMember {
            name: m.name.clone(),
            score: m.local_score,
            stars: m.stars,
        })
        .collect();

    ranking.sort_by(|a, b| b.score.cmp(&a.score).then(b.stars.cmp(&a.stars)));

    ranking
}

/// Extracts everyone with progress on the given day of the month. The day key
/// is derived from the integer directly; members without that key have not
/// started today's puzzle and are excluded.
pub fn daily_completions(members: &HashMap<String, Member>, day: u32) -> Vec<DailyCompletion> {
    let day_key = day.to_string();

    members
        .values()
        .filter_map(|m| {
            let parts = m.completion_day_level.get(&day_key)?;
            let first = parts.get("1")?;
            Some(DailyCompletion {
                name: m.name.clone(),
                first_star_ts: first.get_star_ts,
                second_star_ts: parts.get("2").map(|e| e.get_star_ts),
            })
        })
        .collect()
}
