use std::time::Duration;

use slack_reporter::{SlackConfig, SlackError};

/// Tests for configuration construction and fail-fast validation.

#[test]
fn test_builder_applies_defaults() {
    let config = SlackConfig::builder()
        .bot_token("xoxb-token")
        .default_channel("C123")
        .build()
        .expect("minimal config should build");

    assert_eq!(config.api_url(), "https://slack.com/api/chat.postMessage");
    assert_eq!(config.retry_attempts(), 3);
    assert_eq!(config.retry_delay(), Duration::from_millis(1000));
    assert_eq!(config.timeout(), Duration::from_secs(30));
}

#[test]
fn test_builder_honors_overrides() {
    let config = SlackConfig::builder()
        .bot_token("xoxb-token")
        .default_channel("C123")
        .api_url("http://localhost:9999/post")
        .retry_attempts(5)
        .retry_delay(Duration::from_millis(250))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("config with overrides should build");

    assert_eq!(config.api_url(), "http://localhost:9999/post");
    assert_eq!(config.retry_attempts(), 5);
    assert_eq!(config.retry_delay(), Duration::from_millis(250));
    assert_eq!(config.timeout(), Duration::from_secs(5));
}

#[test]
fn test_missing_token_is_rejected() {
    let err = SlackConfig::builder()
        .default_channel("C123")
        .build()
        .expect_err("config without a token should be rejected");

    assert!(
        matches!(err, SlackError::InvalidInput(_)),
        "expected InvalidInput, got {err:?}"
    );
}

#[test]
fn test_blank_token_is_rejected() {
    let err = SlackConfig::builder()
        .bot_token("   ")
        .default_channel("C123")
        .build()
        .expect_err("whitespace-only token should be rejected");

    assert!(matches!(err, SlackError::InvalidInput(_)));
}

#[test]
fn test_blank_default_channel_is_rejected() {
    let err = SlackConfig::builder()
        .bot_token("xoxb-token")
        .default_channel("")
        .build()
        .expect_err("empty default channel should be rejected");

    assert!(matches!(err, SlackError::InvalidInput(_)));
}

#[test]
fn test_zero_retry_attempts_is_rejected() {
    let err = SlackConfig::builder()
        .bot_token("xoxb-token")
        .default_channel("C123")
        .retry_attempts(0)
        .build()
        .expect_err("zero retry attempts should be rejected");

    assert!(matches!(err, SlackError::InvalidInput(_)));
}

#[test]
fn test_error_taxonomy_retryability() {
    assert!(SlackError::HttpError("timeout".into()).is_retryable());
    assert!(SlackError::ApiError("rate_limited".into()).is_retryable());
    assert!(!SlackError::InvalidInput("no channel".into()).is_retryable());
    assert!(!SlackError::Cancelled.is_retryable());
    assert!(
        !SlackError::RetriesExhausted {
            attempts: 3,
            source: Box::new(SlackError::ApiError("oops".into())),
        }
        .is_retryable()
    );
}

#[test]
fn test_retries_exhausted_display_includes_cause() {
    let err = SlackError::RetriesExhausted {
        attempts: 3,
        source: Box::new(SlackError::ApiError("channel_not_found".into())),
    };

    let rendered = err.to_string();
    assert!(
        rendered.contains("after 3 attempts"),
        "display should state the attempt count, got: {rendered}"
    );
    assert!(
        rendered.contains("channel_not_found"),
        "display should include the wrapped cause, got: {rendered}"
    );
}
