//! `check`: report whether a file would be accepted.

use std::path::Path;

use engine_obj::{import_reported, CodecConfig, CollectingReporter, MemoryScene, Outcome};
use serde::Serialize;

use crate::output::Output;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub path: String,
    pub accepted: bool,
    pub errors: Vec<String>,
}

/// Returns whether the file was accepted.
pub fn run(input: &Path, config: &CodecConfig, out: &Output) -> bool {
    let report = check(input, config);
    out.print(&report);

    if report.accepted {
        out.success(&format!("{} is a valid engine asset", report.path));
    } else {
        for error in &report.errors {
            out.error(error);
        }
    }

    report.accepted
}

fn check(input: &Path, config: &CodecConfig) -> CheckReport {
    let mut scene = MemoryScene::new();
    let mut reporter = CollectingReporter::new();
    let outcome = import_reported(&mut scene, input, config, &mut reporter);

    CheckReport {
        path: input.display().to_string(),
        accepted: outcome == Outcome::Completed,
        errors: reporter.errors().map(str::to_string).collect(),
    }
}
