//! CLI entrypoint for the fixfmt conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Conformance tooling for fixfmt.
#[derive(Debug, Parser)]
#[command(name = "fixfmt-harness")]
#[command(about = "Golden-fixture conformance harness for fixfmt-core")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify `fixfmt_core::format` against golden fixtures.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long, default_value = "crates/fixfmt-harness/tests/format/golden")]
        fixture: PathBuf,
        /// Output report path (markdown); a sibling `.json` is written too.
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify { fixture, report } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());

            let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(&fixture)?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                .collect();
            fixture_paths.sort();

            if fixture_paths.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let runner = fixfmt_harness::TestRunner::new("fixture-verify");
            let mut results = Vec::new();
            for path in fixture_paths {
                match fixfmt_harness::FixtureSet::from_file(&path) {
                    Ok(set) => results.extend(runner.run(&set)),
                    Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
                }
            }

            let summary = fixfmt_harness::VerificationSummary::from_results(results);
            let report_doc = fixfmt_harness::ConformanceReport {
                title: String::from("fixfmt Conformance Report"),
                family: String::from("format"),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
    }

    Ok(())
}
