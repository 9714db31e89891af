use std::env;
use std::num::NonZeroU32;

use quiz_core::DEFAULT_SECONDS_PER_QUESTION;

pub const DEFAULT_TRIVIA_URL: &str = "https://opentdb.com/api.php";
pub const DEFAULT_JOKE_URL: &str = "https://v2.jokeapi.dev/joke/Any";

/// Provider endpoints and quiz pacing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    pub trivia_url: String,
    pub joke_url: String,
    pub seconds_per_question: NonZeroU32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            trivia_url: DEFAULT_TRIVIA_URL.into(),
            joke_url: DEFAULT_JOKE_URL.into(),
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
        }
    }
}

impl ProviderConfig {
    /// Read `QUIZ_TRIVIA_URL`, `QUIZ_JOKE_URL` and `QUIZ_SECONDS_PER_QUESTION`.
    ///
    /// Missing, blank or invalid values keep the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let trivia_url = non_blank_var("QUIZ_TRIVIA_URL").unwrap_or(defaults.trivia_url);
        let joke_url = non_blank_var("QUIZ_JOKE_URL").unwrap_or(defaults.joke_url);
        let seconds_per_question = non_blank_var("QUIZ_SECONDS_PER_QUESTION")
            .as_deref()
            .and_then(parse_seconds)
            .unwrap_or(defaults.seconds_per_question);
        Self {
            trivia_url,
            joke_url,
            seconds_per_question,
        }
    }
}

/// Parse a positive number of seconds.
#[must_use]
pub fn parse_seconds(raw: &str) -> Option<NonZeroU32> {
    raw.trim().parse::<u32>().ok().and_then(NonZeroU32::new)
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_must_be_positive() {
        assert_eq!(parse_seconds("30").map(NonZeroU32::get), Some(30));
        assert_eq!(parse_seconds(" 7 ").map(NonZeroU32::get), Some(7));
        assert!(parse_seconds("0").is_none());
        assert!(parse_seconds("-5").is_none());
        assert!(parse_seconds("soon").is_none());
    }

    #[test]
    fn defaults_point_at_public_providers() {
        let config = ProviderConfig::default();
        assert_eq!(config.trivia_url, DEFAULT_TRIVIA_URL);
        assert_eq!(config.joke_url, DEFAULT_JOKE_URL);
        assert_eq!(config.seconds_per_question.get(), 25);
    }
}
