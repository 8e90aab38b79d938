//! Shared severity scale used by the alerting report families.

use std::fmt;
use std::str::FromStr;

use crate::errors::SlackError;

/// Severity of an error, vulnerability, or budget/risk alert.
///
/// One lookup serves every report family, so icons and labels cannot
/// drift between templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Critical => "🚨",
            Severity::High => "⚠️",
            Severity::Medium => "🔶",
            Severity::Low => "ℹ️",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = SlackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CRITICAL" => Ok(Severity::Critical),
            "HIGH" => Ok(Severity::High),
            "MEDIUM" => Ok(Severity::Medium),
            "LOW" => Ok(Severity::Low),
            other => Err(SlackError::InvalidInput(format!(
                "unknown severity: {other}"
            ))),
        }
    }
}
