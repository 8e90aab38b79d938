//! Delivery client: serializes a message, posts it to the Slack API and
//! retries with a fixed delay until delivered or the attempt budget runs
//! out.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::SlackConfig;
use crate::errors::SlackError;
use crate::message::{MessageBuilder, SlackMessage};

/// Fallback notification text applied when a message carries none.
const DEFAULT_FALLBACK_TEXT: &str = "Automated Notification";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
    warning: Option<String>,
    ts: Option<String>,
    channel: Option<String>,
}

/// Acknowledgment returned by the platform for a delivered message.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    /// Timestamp identifier of the posted message.
    pub ts: Option<String>,
    /// Channel the message landed in, as reported by the platform.
    pub channel: Option<String>,
    /// Non-fatal warning the platform attached to the acceptance.
    pub warning: Option<String>,
}

/// Client for posting messages to Slack with bounded retry.
///
/// The configuration is read-only after construction, so one client can be
/// shared across concurrent sends; each call runs its attempts as a single
/// sequential loop.
pub struct SlackClient {
    config: SlackConfig,
    http: Client,
}

impl SlackClient {
    /// Builds the client, wiring the configured timeout into the underlying
    /// HTTP connector.
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::HttpError`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: SlackConfig) -> Result<Self, SlackError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .build()
            .map_err(|e| SlackError::HttpError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    #[must_use]
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// Sends a one-section text message to the default channel.
    ///
    /// # Errors
    ///
    /// See [`send_message_with`](Self::send_message_with).
    pub async fn send_simple_message(&self, text: &str) -> Result<DeliveryReceipt, SlackError> {
        self.send_message(simple_message(text)).await
    }

    /// Sends a one-section text message to a specific channel.
    ///
    /// # Errors
    ///
    /// See [`send_message_with`](Self::send_message_with).
    pub async fn send_simple_message_to(
        &self,
        text: &str,
        channel: &str,
    ) -> Result<DeliveryReceipt, SlackError> {
        self.send_message_to(simple_message(text), channel).await
    }

    /// Sends a message to the channel set on the message, falling back to
    /// the configured default channel.
    ///
    /// # Errors
    ///
    /// See [`send_message_with`](Self::send_message_with).
    pub async fn send_message(&self, message: SlackMessage) -> Result<DeliveryReceipt, SlackError> {
        self.send_message_with(message, None, futures::future::pending())
            .await
    }

    /// Sends a message to an explicit channel, overriding any channel set
    /// on the message.
    ///
    /// # Errors
    ///
    /// See [`send_message_with`](Self::send_message_with).
    pub async fn send_message_to(
        &self,
        message: SlackMessage,
        channel: &str,
    ) -> Result<DeliveryReceipt, SlackError> {
        self.send_message_with(message, Some(channel), futures::future::pending())
            .await
    }

    /// Full-control send: optional channel override plus a cancellation
    /// future.
    ///
    /// The cancellation future is polled (with priority) before each
    /// attempt and while waiting out the inter-retry delay; once it
    /// completes the send aborts with [`SlackError::Cancelled`].
    ///
    /// # Errors
    ///
    /// * [`SlackError::InvalidInput`] — the resolved channel or the bot
    ///   token is blank; no HTTP request is issued.
    /// * [`SlackError::RetriesExhausted`] — every attempt failed; wraps the
    ///   last transport or API error.
    /// * [`SlackError::Cancelled`] — the cancellation future completed.
    pub async fn send_message_with<F>(
        &self,
        mut message: SlackMessage,
        channel: Option<&str>,
        cancel: F,
    ) -> Result<DeliveryReceipt, SlackError>
    where
        F: Future<Output = ()>,
    {
        let target = self.resolve_channel(&message, channel)?;
        if self.config.bot_token().trim().is_empty() {
            return Err(SlackError::InvalidInput("bot token is not configured".into()));
        }

        message.channel = Some(target);
        if message.text.is_none() {
            message.text = Some(DEFAULT_FALLBACK_TEXT.to_string());
        }

        self.send_with_retry(&message, cancel).await
    }

    fn resolve_channel(
        &self,
        message: &SlackMessage,
        channel: Option<&str>,
    ) -> Result<String, SlackError> {
        let resolved = channel
            .map(str::to_string)
            .or_else(|| message.channel.clone())
            .unwrap_or_else(|| self.config.default_channel().to_string());
        if resolved.trim().is_empty() {
            return Err(SlackError::InvalidInput(
                "channel ID cannot be empty".into(),
            ));
        }
        Ok(resolved)
    }

    async fn send_with_retry<F>(
        &self,
        message: &SlackMessage,
        cancel: F,
    ) -> Result<DeliveryReceipt, SlackError>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(cancel);
        let attempts = self.config.retry_attempts();
        let mut attempt = 0;

        loop {
            attempt += 1;
            info!(attempt, "sending Slack message");

            let outcome = tokio::select! {
                biased;
                () = &mut cancel => return Err(SlackError::Cancelled),
                result = self.perform_request(message) => result,
            };

            match outcome {
                Ok(receipt) => {
                    if let Some(warning) = &receipt.warning {
                        warn!(attempt, warning = %warning, "Slack accepted the message with a warning");
                    }
                    info!(attempt, "Slack message sent successfully");
                    return Ok(receipt);
                }
                Err(err) if attempt < attempts => {
                    warn!(
                        attempt,
                        error = %err,
                        delay_ms = self.config.retry_delay().as_millis() as u64,
                        "failed to send Slack message, retrying"
                    );
                    tokio::select! {
                        biased;
                        () = &mut cancel => return Err(SlackError::Cancelled),
                        () = tokio::time::sleep(self.config.retry_delay()) => {}
                    }
                }
                Err(err) => {
                    warn!(attempt, error = %err, "failed to send Slack message, giving up");
                    return Err(SlackError::RetriesExhausted {
                        attempts: attempt,
                        source: Box::new(err),
                    });
                }
            }
        }
    }

    async fn perform_request(&self, message: &SlackMessage) -> Result<DeliveryReceipt, SlackError> {
        let response = self
            .http
            .post(self.config.api_url())
            .bearer_auth(self.config.bot_token())
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SlackError::ApiError(format!("HTTP {status}: {body}")));
        }

        let api: ApiResponse = response
            .json()
            .await
            .map_err(|e| SlackError::ApiError(format!("failed to parse response: {e}")))?;

        if api.ok {
            Ok(DeliveryReceipt {
                ts: api.ts,
                channel: api.channel,
                warning: api.warning,
            })
        } else {
            Err(SlackError::ApiError(
                api.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

fn simple_message(text: &str) -> SlackMessage {
    MessageBuilder::new().text(text).add_section(text).build()
}
