//! Executes fixture cases against the real `fixfmt_core::format` (unlike a
//! capture/replay harness for an external system, there is no "host"
//! implementation to shell out to here — the core crate itself is both the
//! reference and the subject).

use fixfmt_core::FormatError;

use crate::fixtures::{Expected, FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign, carried into reports.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self { campaign: campaign.into() }
    }

    /// Run every case in `fixture_set` and return one result per case.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(|case| self.run_case(case)).collect()
    }

    fn run_case(&self, case: &FixtureCase) -> VerificationResult {
        let template = case.template.as_bytes();
        let values: Vec<_> = case.args.iter().map(crate::arg_spec::ArgSpec::to_arg_value).collect();
        let mut buf = vec![0u8; case.buffer_len];
        let outcome = fixfmt_core::format(&mut buf, template, &values);

        let expected_display = match &case.expected {
            Expected::Ok { output } => output.clone(),
            Expected::Err { kind } => format!("err:{kind}"),
        };

        let (actual_display, passed) = match (&case.expected, &outcome) {
            (Expected::Ok { output }, Ok(n)) => {
                let actual = String::from_utf8_lossy(&buf[..*n]).into_owned();
                let passed = &actual == output;
                (actual, passed)
            }
            (Expected::Err { kind }, Err(e)) => {
                let actual = format!("err:{}", error_kind(e));
                let passed = actual == format!("err:{kind}");
                (actual, passed)
            }
            (Expected::Ok { .. }, Err(e)) => (format!("err:{}", error_kind(e)), false),
            (Expected::Err { .. }, Ok(n)) => {
                (String::from_utf8_lossy(&buf[..*n]).into_owned(), false)
            }
        };

        let diff = (!passed)
            .then(|| format!("expected {expected_display:?}, got {actual_display:?}"));

        VerificationResult {
            case_name: format!("{}::{}", self.campaign, case.name),
            spec_section: case.spec_section.clone(),
            passed,
            expected: expected_display,
            actual: actual_display,
            diff,
        }
    }
}

/// `FormatError`'s variant name in the fixture JSON's `snake_case` spelling.
fn error_kind(err: &FormatError) -> &'static str {
    match err {
        FormatError::SpecError => "spec_error",
        FormatError::TypeMismatch => "type_mismatch",
        FormatError::ArgIndex => "arg_index",
        FormatError::Overflow => "overflow",
    }
}
