//! `pvars convert`: rewrite legacy placeholders.

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use promptvars_core::config::types::ResolvedConfig;
use promptvars_core::{convert_all_variables, plan_conversion};
use tracing::{info, warn};

use crate::ConvertArgs;
use crate::cmd::input::{self, Source};
use crate::error::CliError;

pub fn run(rc: &ResolvedConfig, args: &ConvertArgs) -> Result<ExitCode, CliError> {
    let sources = input::collect(&args.paths, &rc.scan)?;

    if args.check {
        return check(&sources);
    }
    if args.write {
        write_in_place(&sources)?;
        return Ok(ExitCode::SUCCESS);
    }

    let [source] = sources.as_slice() else {
        return Err(CliError::Usage(
            "convert prints a single template; use --write or --check for several",
        ));
    };
    let text = source.read()?;
    let converted = convert_all_variables(&text);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(converted.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::Write("stdout".to_string(), e))?;
    Ok(ExitCode::SUCCESS)
}

/// Plans every file before writing any, so a failure leaves the tree as it was.
fn write_in_place(sources: &[Source]) -> Result<(), CliError> {
    if sources.iter().any(|s| matches!(s, Source::Stdin)) {
        return Err(CliError::Usage("--write needs file paths, not stdin"));
    }

    let mut pending = Vec::new();
    for source in sources {
        let Source::File(path) = source else { continue };
        let text = source.read()?;
        let plan = plan_conversion(&text);
        for skipped in &plan.skipped {
            warn!(path = %path.display(), original = %skipped.original, "left unconverted");
        }
        if !plan.is_empty() {
            pending.push((path, plan.apply(&text), plan.replacements.len()));
        }
    }

    for (path, converted, replaced) in &pending {
        fs::write(path, converted)
            .map_err(|e| CliError::Write(path.display().to_string(), e))?;
        info!(path = %path.display(), replaced, "converted");
        println!("converted {} ({replaced} placeholders)", path.display());
    }
    println!("OK   pvars convert: {} of {} files changed", pending.len(), sources.len());
    Ok(())
}

fn check(sources: &[Source]) -> Result<ExitCode, CliError> {
    let mut dirty = 0;
    for source in sources {
        let text = source.read()?;
        let plan = plan_conversion(&text);
        if !plan.is_empty() {
            println!("{}: {} legacy placeholders", source.label(), plan.replacements.len());
            dirty += 1;
        }
    }

    if dirty > 0 {
        println!("{dirty} of {} files need conversion", sources.len());
        return Ok(ExitCode::FAILURE);
    }
    println!("OK   pvars convert --check");
    Ok(ExitCode::SUCCESS)
}
