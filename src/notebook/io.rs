//! Notebook file I/O.
//!
//! The narrow read/write seam between the scrubber and the filesystem:
//! parse a notebook into a key-order-preserving JSON tree, and serialize
//! it back the way Jupyter writes it (1-space indentation, non-ASCII
//! characters emitted literally, no trailing newline).

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use super::NotebookError;

/// Read and parse a notebook file.
///
/// The top level must be a JSON mapping; anything else is rejected by the
/// decoder. Key order is preserved as authored.
pub fn read_notebook(path: &Path) -> Result<Map<String, Value>, NotebookError> {
    let text =
        fs::read_to_string(path).map_err(|e| NotebookError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&text).map_err(|e| NotebookError::Json(path.to_path_buf(), e))
}

/// Serialize a notebook back to `path`, overwriting it.
pub fn write_notebook(path: &Path, notebook: &Map<String, Value>) -> Result<(), NotebookError> {
    let buf = to_notebook_json(notebook).map_err(|e| NotebookError::Json(path.to_path_buf(), e))?;
    fs::write(path, buf).map_err(|e| NotebookError::Io(path.to_path_buf(), e))
}

/// Serialize with 1 space per nesting level, matching the notebook on-disk
/// convention.
fn to_notebook_json(notebook: &Map<String, Value>) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(4096);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    notebook.serialize(&mut ser)?;
    Ok(buf)
}
