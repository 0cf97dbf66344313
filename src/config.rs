use crate::Error;

const GUIDANCE: &str = "Please set LEADERBOARD_ID, SESSION_ID and SLACK_WEBHOOK \
(environment variables or a .env file) before running.";

/// The three secrets the pipeline needs, resolved once at startup and passed
/// to the fetch/publish steps explicitly.
#[derive(Debug)]
pub struct Config {
    pub leaderboard_id: String,
    pub session_id: String,
    pub slack_webhook: String,
}

impl Config {
    /// Environment variables win; if any is unset, a local `.env` file may
    /// supply the rest (dotenv never overrides variables that are already set).
    pub fn from_env() -> Result<Self, Error> {
        let vars = ["LEADERBOARD_ID", "SESSION_ID", "SLACK_WEBHOOK"];

        if vars.iter().any(|name| std::env::var(name).is_err()) {
            match dotenv::dotenv() {
                Ok(path) => log::info!("loaded secrets from {}", path.display()),
                Err(e) => log::debug!("no .env fallback: {}", e),
            }
        }

        Self::from_values(
            std::env::var("LEADERBOARD_ID").unwrap_or_default(),
            std::env::var("SESSION_ID").unwrap_or_default(),
            std::env::var("SLACK_WEBHOOK").unwrap_or_default(),
        )
    }

    fn from_values(
        leaderboard_id: String,
        session_id: String,
        slack_webhook: String,
    ) -> Result<Self, Error> {
        if leaderboard_id.is_empty() || session_id.is_empty() || slack_webhook.is_empty() {
            return Err(GUIDANCE.into());
        }

        Ok(Self {
            leaderboard_id,
            session_id,
            slack_webhook,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn complete_values_are_accepted() {
        let config = Config::from_values(
            "123456".to_owned(),
            "53616c7465645f5f".to_owned(),
            "https://hooks.slack.com/services/T00/B00/XXX".to_owned(),
        )
        .unwrap();
        assert_eq!(config.leaderboard_id, "123456");
    }

    #[test]
    fn empty_values_are_rejected_with_guidance() {
        let err = Config::from_values(String::new(), String::new(), String::new()).unwrap_err();
        assert!(err.to_string().contains("LEADERBOARD_ID"));

        // A single missing value is just as fatal as all three.
        let err = Config::from_values(
            "123456".to_owned(),
            String::new(),
            "https://hooks.slack.com/services/T00/B00/XXX".to_owned(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("SESSION_ID"));
    }
}
