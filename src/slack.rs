use serde::Serialize;

const ICON_EMOJI: &str = ":christmas_tree:";
const USERNAME: &str = "Advent Of Code Leaderboard";

#[derive(Debug, Serialize)]
struct SlackPayload<'a> {
    icon_emoji: &'a str,
    username: &'a str,
    text: &'a str,
}

/// Posts the message to the incoming webhook. Fire-and-forget: the response
/// status is not checked and transport errors only produce a warning.
pub fn post_message(http: &reqwest::blocking::Client, webhook_url: &str, text: &str) {
    let payload = SlackPayload {
        icon_emoji: ICON_EMOJI,
        username: USERNAME,
        text,
    };

    log::info!("posting leaderboard message to Slack");
    if let Err(e) = http.post(webhook_url).json(&payload).send() {
        log::warn!("failed to post to Slack webhook: {}", e);
    }
}
