//! Per-case and aggregate verification results.

use serde::{Deserialize, Serialize};

/// Result of running a single fixture case against `fixfmt_core::format`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Scenario this case exercises.
    pub spec_section: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Expected outcome, rendered as a short string (`output` text, or
    /// `err:<kind>`).
    pub expected: String,
    /// Actual outcome, rendered the same way.
    pub actual: String,
    /// Human-readable diff, present only when `passed` is `false`.
    pub diff: Option<String>,
}

/// Aggregate verification summary over a fixture set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        Self { total, passed, failed, results }
    }

    /// Returns true if every case passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
