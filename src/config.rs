//! Client configuration.

use std::env;
use std::time::Duration;

use crate::errors::SlackError;

const DEFAULT_API_URL: &str = "https://slack.com/api/chat.postMessage";
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(1000);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Validated, read-only configuration for [`SlackClient`](crate::SlackClient).
///
/// Construct through [`SlackConfig::builder`] or [`SlackConfig::from_env`];
/// both fail fast on a blank token or default channel, so a constructed
/// config always carries usable credentials.
#[derive(Debug, Clone)]
pub struct SlackConfig {
    bot_token: String,
    default_channel: String,
    api_url: String,
    retry_attempts: u32,
    retry_delay: Duration,
    timeout: Duration,
}

impl SlackConfig {
    pub fn builder() -> SlackConfigBuilder {
        SlackConfigBuilder::new()
    }

    /// Loads configuration from the environment.
    ///
    /// `SLACK_BOT_TOKEN` and `SLACK_DEFAULT_CHANNEL` are required;
    /// `SLACK_API_URL`, `SLACK_RETRY_ATTEMPTS`, `SLACK_RETRY_DELAY_MS` and
    /// `SLACK_TIMEOUT_MS` override the defaults when present.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::InvalidInput`] when a required variable is
    /// missing or a numeric override does not parse.
    pub fn from_env() -> Result<Self, SlackError> {
        let mut builder = Self::builder()
            .bot_token(env::var("SLACK_BOT_TOKEN").map_err(|e| {
                SlackError::InvalidInput(format!("SLACK_BOT_TOKEN: {e}"))
            })?)
            .default_channel(env::var("SLACK_DEFAULT_CHANNEL").map_err(|e| {
                SlackError::InvalidInput(format!("SLACK_DEFAULT_CHANNEL: {e}"))
            })?);

        if let Ok(url) = env::var("SLACK_API_URL") {
            builder = builder.api_url(url);
        }
        if let Ok(attempts) = env::var("SLACK_RETRY_ATTEMPTS") {
            builder = builder.retry_attempts(parse_env("SLACK_RETRY_ATTEMPTS", &attempts)?);
        }
        if let Ok(delay_ms) = env::var("SLACK_RETRY_DELAY_MS") {
            builder = builder
                .retry_delay(Duration::from_millis(parse_env("SLACK_RETRY_DELAY_MS", &delay_ms)?));
        }
        if let Ok(timeout_ms) = env::var("SLACK_TIMEOUT_MS") {
            builder = builder
                .timeout(Duration::from_millis(parse_env("SLACK_TIMEOUT_MS", &timeout_ms)?));
        }

        builder.build()
    }

    #[must_use]
    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }

    #[must_use]
    pub fn default_channel(&self) -> &str {
        &self.default_channel
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    #[must_use]
    pub fn retry_attempts(&self) -> u32 {
        self.retry_attempts
    }

    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, SlackError>
where
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e| SlackError::InvalidInput(format!("{name}: {e}")))
}

/// Builder for [`SlackConfig`].
#[derive(Debug, Default)]
pub struct SlackConfigBuilder {
    bot_token: Option<String>,
    default_channel: Option<String>,
    api_url: Option<String>,
    retry_attempts: Option<u32>,
    retry_delay: Option<Duration>,
    timeout: Option<Duration>,
}

impl SlackConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    pub fn bot_token(mut self, token: impl Into<String>) -> Self {
        self.bot_token = Some(token.into());
        self
    }

    pub fn default_channel(mut self, channel: impl Into<String>) -> Self {
        self.default_channel = Some(channel.into());
        self
    }

    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    pub fn retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = Some(attempts);
        self
    }

    pub fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::InvalidInput`] when the bot token or default
    /// channel is missing or blank, or `retry_attempts` is zero.
    pub fn build(self) -> Result<SlackConfig, SlackError> {
        let bot_token = self.bot_token.unwrap_or_default();
        if bot_token.trim().is_empty() {
            return Err(SlackError::InvalidInput("bot token is required".into()));
        }
        let default_channel = self.default_channel.unwrap_or_default();
        if default_channel.trim().is_empty() {
            return Err(SlackError::InvalidInput(
                "default channel ID is required".into(),
            ));
        }
        let retry_attempts = self.retry_attempts.unwrap_or(DEFAULT_RETRY_ATTEMPTS);
        if retry_attempts == 0 {
            return Err(SlackError::InvalidInput(
                "retry attempts must be at least 1".into(),
            ));
        }

        Ok(SlackConfig {
            bot_token,
            default_channel,
            api_url: self.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            retry_attempts,
            retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
        })
    }
}
