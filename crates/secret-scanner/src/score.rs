//! Risk scoring and recommendation mapping.
//!
//! The score starts at a baseline of 100 and loses a fixed penalty per
//! finding by severity.  It is a linear accumulation over the multiset of
//! severities; finding order, category, and proximity never matter.

use serde::{Deserialize, Serialize};

use crate::patterns::Severity;
use crate::scanner::Finding;

/// Score penalty applied for one finding of the given severity.
fn severity_penalty(severity: Severity) -> i32 {
    match severity {
        Severity::Critical => 30,
        Severity::High => 20,
        Severity::Medium => 10,
        Severity::Low => 5,
    }
}

/// Reduce a set of findings to a single risk score in `0..=100`.
///
/// The running total is clamped at 0; it cannot exceed 100 since only
/// subtraction occurs.
pub fn risk_score(findings: &[Finding]) -> u8 {
    let mut score: i32 = 100;
    for finding in findings {
        score -= severity_penalty(finding.severity);
    }
    score.max(0) as u8
}

// ---------------------------------------------------------------------------
// Recommendation
// ---------------------------------------------------------------------------

/// Qualitative risk tier derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLevel {
    Safe,
    LowRisk,
    MediumRisk,
    HighRisk,
    Critical,
}

/// What the host should do with the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedAction {
    Proceed,
    Review,
    Redact,
    Block,
}

/// Derived risk verdict presented to the user alongside the score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub level: RiskLevel,
    pub message: String,
    pub action: RecommendedAction,
}

/// Map a score to a [`Recommendation`].
///
/// Thresholds are evaluated in descending order; the first match wins.
pub fn recommend(score: u8) -> Recommendation {
    if score == 100 {
        return Recommendation {
            level: RiskLevel::Safe,
            message: "No security issues detected. Safe to send.".to_string(),
            action: RecommendedAction::Proceed,
        };
    }

    if score >= 80 {
        return Recommendation {
            level: RiskLevel::LowRisk,
            message: "Minor security concerns detected. Review before sending.".to_string(),
            action: RecommendedAction::Review,
        };
    }

    if score >= 60 {
        return Recommendation {
            level: RiskLevel::MediumRisk,
            message: "Security issues detected. Consider redacting sensitive data.".to_string(),
            action: RecommendedAction::Redact,
        };
    }

    if score >= 40 {
        return Recommendation {
            level: RiskLevel::HighRisk,
            message: "Serious security issues detected. Redaction strongly recommended."
                .to_string(),
            action: RecommendedAction::Block,
        };
    }

    Recommendation {
        level: RiskLevel::Critical,
        message: "Critical security issues detected. Do not send without redaction.".to_string(),
        action: RecommendedAction::Block,
    }
}
