//! # secret-scanner
//!
//! Detects secrets and personal data in text about to leave the machine,
//! scores the risk, and redacts findings in place.
//!
//! The crate is organised around four layers:
//!
//! 1. **[`patterns`]** -- static catalogue of regex-based detectors, grouped
//!    by [`Category`](patterns::Category) and weighted by
//!    [`Severity`](patterns::Severity).
//! 2. **[`scanner`]** -- compiles the catalogue into a
//!    [`RegexSet`](regex::RegexSet), filters by
//!    [`SensitivityLevel`](scanner::SensitivityLevel), and produces a
//!    [`ScanResult`](scanner::ScanResult) of positioned findings.
//! 3. **[`score`]** -- reduces findings to a 0-100 risk score and a
//!    [`Recommendation`](score::Recommendation).
//! 4. **[`redactor`]** / **[`summary`]** -- rewrite findings out of the
//!    original text, and condense a result for display.
//!
//! Scanning and redaction are pure CPU-bound computations over their
//! inputs; the only mutable scanner state is the configured sensitivity
//! level.
//!
//! ## Quick start
//!
//! ```rust
//! use secret_scanner::{redact, Scanner};
//!
//! let scanner = Scanner::new().unwrap();
//!
//! let clean = scanner.scan("hello world");
//! assert_eq!(clean.score, 100);
//!
//! let result = scanner.scan("login with password=hunter22");
//! assert!(result.has_critical_issues);
//!
//! let redacted = redact("login with password=hunter22", &result.findings);
//! assert_eq!(redacted, "login with password=[REDACTED]");
//! ```

pub mod patterns;
pub mod redactor;
pub mod scanner;
pub mod score;
pub mod summary;

// Re-export the most commonly used items at the crate root for ergonomic
// imports (`use secret_scanner::Scanner`).
pub use patterns::{Category, PatternDef, Placeholder, Severity, PATTERNS};
pub use redactor::redact;
pub use scanner::{Finding, ScanResult, Scanner, ScannerError, SensitivityLevel};
pub use score::{recommend, risk_score, Recommendation, RecommendedAction, RiskLevel};
pub use summary::{grade, summarize, FindingPreview, ScanSummary, SeverityCounts};
