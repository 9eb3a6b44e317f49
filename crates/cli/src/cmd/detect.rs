//! `pvars detect`: report legacy placeholders.

use promptvars_core::config::types::ResolvedConfig;
use promptvars_core::{DetectedVariable, LineIndex, convert_to_supported_format, detect_variables};
use serde::Serialize;

use crate::DetectArgs;
use crate::cmd::input;
use crate::error::CliError;

/// Placeholders found in one template.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: String,
    pub variables: Vec<DetectedVariable>,
}

pub fn run(rc: &ResolvedConfig, args: &DetectArgs) -> Result<(), CliError> {
    let sources = input::collect(&args.paths, &rc.scan)?;

    let mut reports = Vec::with_capacity(sources.len());
    let mut total = 0;
    for source in &sources {
        let text = source.read()?;
        let variables = detect_variables(&text);
        tracing::debug!(path = %source.label(), found = variables.len(), "scanned template");
        total += variables.len();

        let report = FileReport { path: source.label(), variables };
        if !args.json {
            print_lines(&report, &text);
        }
        reports.push(report);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else if total == 0 {
        println!("(no legacy placeholders found)");
    }
    Ok(())
}

/// One line per placeholder: `path:line:col  original -> replacement  (pattern)`.
fn print_lines(report: &FileReport, text: &str) {
    let index = LineIndex::new(text);
    for v in &report.variables {
        let pos = v.position(&index);
        println!(
            "{}:{}:{}  {} -> {}  ({})",
            report.path,
            pos.line,
            pos.column,
            v.original,
            convert_to_supported_format(v),
            v.pattern
        );
    }
}
