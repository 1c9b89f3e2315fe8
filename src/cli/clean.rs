//! Clean command - strip widget state from one notebook file, in place.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::notebook::{self, ChangeSummary, NotebookError};
use crate::utils::fs::backup_file;
use crate::{debug, log};

/// Outcome of cleaning a single notebook.
#[derive(Debug)]
pub struct CleanReport {
    /// Where the original bytes were copied before mutation.
    pub backup: PathBuf,
    /// What the scrub removed.
    pub summary: ChangeSummary,
}

/// Clean one notebook in place, backing up the original first.
///
/// The backup is written before the file is even parsed, so a malformed
/// notebook leaves both the original and its copy intact.
pub fn clean_notebook(path: &Path) -> Result<CleanReport> {
    if !path.is_file() {
        return Err(NotebookError::NotFound(path.to_path_buf()).into());
    }

    let backup = backup_file(path)
        .with_context(|| format!("failed to back up {}", path.display()))?;

    let mut nb = notebook::read_notebook(path)?;
    debug!("clean"; "parsed {} with {} top-level keys", path.display(), nb.len());

    let summary = notebook::sanitize(&mut nb);
    notebook::write_notebook(path, &nb)?;

    log!("backup"; "written to {}", backup.display());
    log!("clean"; "top-level widgets removed: {}", summary.top_level_widgets);
    log!("clean"; "cell outputs removed (widget MIME): {}", summary.cell_outputs_removed);

    Ok(CleanReport { backup, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const DIRTY_NOTEBOOK: &str = r#"{
 "metadata": {"widgets": {"state": {}}, "kernelspec": {"name": "python3"}},
 "cells": [
  {"cell_type": "code",
   "outputs": [
    {"data": {"text/plain": "héllo"}},
    {"data": {"application/vnd.jupyter.widget-state+json": {}}}
   ]}
 ]
}"#;

    #[test]
    fn test_clean_notebook_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nb.ipynb");
        fs::write(&path, DIRTY_NOTEBOOK).unwrap();

        let report = clean_notebook(&path).unwrap();

        // backup holds the original bytes
        assert_eq!(report.backup, dir.path().join("nb.ipynb.bak"));
        assert_eq!(fs::read_to_string(&report.backup).unwrap(), DIRTY_NOTEBOOK);

        // summary matches what was in the file
        assert!(report.summary.top_level_widgets);
        assert_eq!(report.summary.cell_outputs_removed, 1);

        // cleaned file: widgets gone, other metadata and outputs intact
        let cleaned = fs::read_to_string(&path).unwrap();
        let nb = notebook::read_notebook(&path).unwrap();
        assert_eq!(
            nb["metadata"],
            serde_json::json!({"kernelspec": {"name": "python3"}})
        );
        let outputs = nb["cells"][0]["outputs"].as_array().unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0]["data"]["text/plain"], "héllo");

        // 1-space indentation, non-ASCII kept literal
        assert!(cleaned.starts_with("{\n \"metadata\""));
        assert!(cleaned.contains("héllo"));
    }

    #[test]
    fn test_cleaning_twice_reports_nothing_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nb.ipynb");
        fs::write(&path, DIRTY_NOTEBOOK).unwrap();

        clean_notebook(&path).unwrap();
        let first_pass = fs::read_to_string(&path).unwrap();

        let report = clean_notebook(&path).unwrap();

        assert!(report.summary.unchanged());
        assert_eq!(fs::read_to_string(&path).unwrap(), first_pass);
    }

    #[test]
    fn test_missing_notebook_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ipynb");

        let err = clean_notebook(&path).unwrap_err();

        assert!(err.to_string().contains("notebook not found"));
        assert!(!path.with_extension("ipynb.bak").exists());
    }

    #[test]
    fn test_directory_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = clean_notebook(dir.path()).unwrap_err();

        assert!(err.to_string().contains("notebook not found"));
    }

    #[test]
    fn test_malformed_notebook_keeps_original_and_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nb.ipynb");
        fs::write(&path, "not json at all").unwrap();

        let err = clean_notebook(&path).unwrap_err();

        assert!(err.to_string().contains("invalid notebook JSON"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json at all");
        assert!(dir.path().join("nb.ipynb.bak").exists());
    }
}
