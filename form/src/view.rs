//! Rendered form state.

use serde::Serialize;
use std::fmt;

use mever_types::VerificationResult;
use mever_utils::{format_latency, format_score, format_threshold};

/// Positive or negative verdict indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    Match,
    NoMatch,
}

impl Badge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Match => "MATCH",
            Self::NoMatch => "NO MATCH",
        }
    }
}

/// A verdict formatted for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResultPanel {
    pub badge: Badge,
    pub headline: String,
    pub score: String,
    pub threshold: String,
    pub latency: String,
}

impl ResultPanel {
    pub fn render(result: &VerificationResult, subject: &str) -> Self {
        let (badge, headline) = if result.is_me {
            (Badge::Match, format!("IS {subject}"))
        } else {
            (Badge::NoMatch, format!("IS NOT {subject}"))
        };
        Self {
            badge,
            headline,
            score: format_score(result.score),
            threshold: format_threshold(result.threshold),
            latency: format_latency(result.timing_ms),
        }
    }
}

impl fmt::Display for ResultPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.badge.as_str(), self.headline)?;
        writeln!(f, "score: {}", self.score)?;
        writeln!(f, "threshold: {}", self.threshold)?;
        write!(f, "latency: {}", self.latency)
    }
}

/// Snapshot of everything the form shows.
///
/// At most one of `error` and `result` is set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub submit_enabled: bool,
    pub spinner_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultPanel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(is_me: bool) -> VerificationResult {
        VerificationResult {
            is_me,
            score: 0.97,
            threshold: 0.80,
            timing_ms: 42.0,
        }
    }

    #[test]
    fn renders_positive_verdict() {
        let panel = ResultPanel::render(&result(true), "ME");
        assert_eq!(panel.badge, Badge::Match);
        assert_eq!(panel.headline, "IS ME");
        assert_eq!(panel.score, "0.9700");
        assert_eq!(panel.threshold, "0.80");
        assert_eq!(panel.latency, "42 ms");
    }

    #[test]
    fn renders_negative_verdict() {
        let panel = ResultPanel::render(&result(false), "FERNANDO");
        assert_eq!(panel.badge, Badge::NoMatch);
        assert_eq!(panel.headline, "IS NOT FERNANDO");
    }

    #[test]
    fn display_lists_every_figure() {
        let text = ResultPanel::render(&result(true), "ME").to_string();
        assert_eq!(
            text,
            "[MATCH] IS ME\nscore: 0.9700\nthreshold: 0.80\nlatency: 42 ms"
        );
    }
}
