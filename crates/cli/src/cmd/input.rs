//! Resolving command-line paths into templates to read.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use promptvars_core::config::types::ScanConfig;
use promptvars_core::walker::TemplateWalker;
use tracing::debug;

use crate::error::CliError;

/// Label used for standard input in reports.
pub const STDIN_LABEL: &str = "-";

/// One template to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::Stdin => STDIN_LABEL.to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<String, CliError> {
        match self {
            Source::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| CliError::Read(STDIN_LABEL.to_string(), e))?;
                Ok(buf)
            }
            Source::File(path) => {
                fs::read_to_string(path).map_err(|e| CliError::Read(self.label(), e))
            }
        }
    }
}

/// Expand `paths` into sources. No paths means standard input; directories
/// are walked with the configured extensions and exclusions.
pub fn collect(paths: &[PathBuf], scan: &ScanConfig) -> Result<Vec<Source>, CliError> {
    if paths.is_empty() {
        return Ok(vec![Source::Stdin]);
    }

    let mut sources = Vec::new();
    for path in paths {
        if path.as_os_str() == STDIN_LABEL {
            // Stdin can only be read once.
            if !sources.contains(&Source::Stdin) {
                sources.push(Source::Stdin);
            }
        } else if path.is_dir() {
            let files = TemplateWalker::new(path, scan)?.walk()?;
            debug!(dir = %path.display(), files = files.len(), "walked directory");
            sources.extend(files.into_iter().map(Source::File));
        } else if path.is_file() {
            sources.push(Source::File(path.clone()));
        } else {
            return Err(CliError::Missing(path.display().to_string()));
        }
    }
    Ok(sources)
}
