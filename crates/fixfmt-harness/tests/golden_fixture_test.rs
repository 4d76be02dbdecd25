//! Runs the S1-S8 and boundary fixtures against the real
//! `fixfmt_core::format` and asserts every case passes.

use std::path::Path;

use fixfmt_harness::{FixtureSet, TestRunner, VerificationSummary};

#[test]
fn s1_s8_and_boundaries_all_pass() {
    let path = Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/format/golden/s1_s8_and_boundaries.v1.json"
    ));
    let set = FixtureSet::from_file(path).expect("fixture file should parse");

    let runner = TestRunner::new("golden");
    let results = runner.run(&set);
    let summary = VerificationSummary::from_results(results);

    for result in &summary.results {
        assert!(
            result.passed,
            "{}: {}",
            result.case_name,
            result.diff.as_deref().unwrap_or("(no diff)")
        );
    }
    assert!(summary.all_passed());
    assert_eq!(summary.total, set.cases.len());
}
