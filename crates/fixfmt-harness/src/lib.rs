//! Golden-fixture conformance harness for `fixfmt-core`.
//!
//! This crate provides:
//! - Fixture loading: JSON-encoded template/args/expected-output cases
//! - A runner that executes cases against the real `fixfmt_core::format`
//! - A report renderer (Markdown + JSON)
//!
//! The S1-S8 end-to-end scenarios and boundary checks are data-driven from
//! `tests/format/golden/*.json`, exercised by this crate's own integration
//! test and by the `harness` binary's `verify` subcommand.

#![forbid(unsafe_code)]

mod arg_spec;
mod fixtures;
mod report;
mod runner;
mod verify;

pub use arg_spec::ArgSpec;
pub use fixtures::{Expected, FixtureCase, FixtureError, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
