use crate::{
    leaderboard::{DailyCompletion, RankedMember},
    Error,
};

use chrono::{TimeZone, Utc};

/// Slack emoji for ranks 1..=3, looked up by rank index.
const MEDALS: [&str; 3] = [":trophy:", ":second_place_medal:", ":third_place_medal:"];

/// Puzzles stop unlocking after day 25; no timing blocks past that.
const LAST_PUZZLE_DAY: u32 = 25;

/// Puzzles unlock at midnight EST, which is 05:00 UTC.
fn unlock_instant(year: i32, day: u32) -> Result<i64, Error> {
    Ok(Utc
        .with_ymd_and_hms(year, 12, day, 5, 0, 0)
        .single()
        .ok_or_else(|| format!("invalid puzzle unlock date {}-12-{}", year, day))?
        .timestamp())
}

fn format_hms(seconds: i64) -> String {
    format!(
        "{}:{:02}:{:02}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60
    )
}

/// Solve duration as `h:mm:ss` zero-filled to 8 characters, so an hour under
/// 10 renders as `01:23:45` and wider durations grow naturally.
fn format_duration(seconds: i64) -> String {
    format!("{:0>8}", format_hms(seconds))
}

/// The overall ranking. Members without a star are dropped, the top three of
/// the remainder get their medal, and a link to the web view trails the block.
pub fn format_leaderboard(ranking: &[RankedMember], url: &str) -> String {
    let mut message = String::new();

    for (rank, member) in ranking.iter().filter(|m| m.stars > 0).enumerate() {
        let medal = match MEDALS.get(rank) {
            Some(medal) => format!(" {}", medal),
            None => String::new(),
        };
        message += &format!(
            "{}*{}* {} Points, {} Stars\n",
            medal, member.name, member.score, member.stars
        );
    }

    message += &format!("\n<{}|View Leaderboard Online>", url);

    message
}

/// Today's part-1 placements, earliest star first.
pub fn format_part1(completions: &[DailyCompletion], unlock_ts: i64) -> String {
    let mut placements: Vec<(&str, i64)> = completions
        .iter()
        .map(|c| (c.name.as_str(), c.first_star_ts))
        .collect();
    placements.sort_by_key(|&(_, ts)| ts);

    let mut message = String::from("First star");
    for (i, (name, ts)) in placements.into_iter().enumerate() {
        message += &format!("\n{:0>2}) {} {}", i + 1, format_duration(ts - unlock_ts), name);
    }

    message
}

/// Today's part-2 placements, earliest second star first. The delta trailing
/// each line is the gap between the member's two stars.
pub fn format_part2(completions: &[DailyCompletion], unlock_ts: i64) -> String {
    let mut placements: Vec<(&str, i64, i64)> = completions
        .iter()
        .filter_map(|c| Some((c.name.as_str(), c.second_star_ts?, c.first_star_ts)))
        .collect();
    placements.sort_by_key(|&(_, second_ts, _)| second_ts);

    let mut message = String::from("Second star");
    for (i, (name, second_ts, first_ts)) in placements.into_iter().enumerate() {
        message += &format!(
            "\n{:0>2}) {} {} (+{})",
            i + 1,
            format_duration(second_ts - unlock_ts),
            name,
            format_hms(second_ts - first_ts)
        );
    }

    message
}

/// Assembles the full Slack message. The day-timing blocks only exist while
/// puzzles are still unlocking.
pub fn build_message(
    ranking: &[RankedMember],
    completions: &[DailyCompletion],
    url: &str,
    year: i32,
    day: u32,
) -> Result<String, Error> {
    let mut message = format_leaderboard(ranking, url);

    if day <= LAST_PUZZLE_DAY {
        let unlock_ts = unlock_instant(year, day)?;
        message += &format!(
            "\n\nDay {}:\n\n{}\n\n{}",
            day,
            format_part1(completions, unlock_ts),
            format_part2(completions, unlock_ts)
        );
    }

    Ok(message)
}
