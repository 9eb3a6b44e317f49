//! Recursive template directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::config::types::ScanConfig;

#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("directory does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Walker for discovering template files under a directory.
#[derive(Debug)]
pub struct TemplateWalker {
    root: PathBuf,
    extensions: Vec<String>,
    /// Directory names skipped at any depth.
    exclude: Vec<String>,
}

impl TemplateWalker {
    pub fn new(root: &Path, scan: &ScanConfig) -> Result<Self, WalkerError> {
        if !root.is_dir() {
            return Err(WalkerError::MissingRoot(root.display().to_string()));
        }

        let extensions = scan
            .extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();

        Ok(Self { root: root.to_path_buf(), extensions, exclude: scan.exclude.clone() })
    }

    /// Walk the directory and return matching files, sorted by path.
    pub fn walk(&self) -> Result<Vec<PathBuf>, WalkerError> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.is_excluded(e))
        {
            let entry = entry
                .map_err(|e| WalkerError::WalkError(self.root.display().to_string(), e))?;

            let path = entry.path();
            if entry.file_type().is_file() && self.has_template_extension(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn is_excluded(&self, entry: &walkdir::DirEntry) -> bool {
        // Never filter the root directory (depth 0)
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        self.exclude.iter().any(|excluded| excluded == name.as_ref())
    }

    fn has_template_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| *allowed == ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "x").unwrap();
    }

    #[test]
    fn picks_configured_extensions_and_skips_excluded_dirs() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();
        touch(root, "a.md");
        touch(root, "nested/b.PROMPT");
        touch(root, "nested/c.rs");
        touch(root, "node_modules/d.md");
        touch(root, ".git/e.txt");

        let walker = TemplateWalker::new(root, &ScanConfig::default()).unwrap();
        let files: Vec<PathBuf> = walker
            .walk()
            .unwrap()
            .into_iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(files, vec![PathBuf::from("a.md"), PathBuf::from("nested/b.PROMPT")]);
    }

    #[test]
    fn extensions_may_carry_a_dot() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "x.tmpl");
        let scan = ScanConfig { extensions: vec![".tmpl".into()], exclude: Vec::new() };
        let walker = TemplateWalker::new(tmp.path(), &scan).unwrap();
        assert_eq!(walker.walk().unwrap().len(), 1);
    }

    #[test]
    fn missing_root_fails() {
        let tmp = TempDir::new().unwrap();
        let err = TemplateWalker::new(&tmp.path().join("nope"), &ScanConfig::default())
            .unwrap_err();
        assert!(matches!(err, WalkerError::MissingRoot(_)));
    }
}
