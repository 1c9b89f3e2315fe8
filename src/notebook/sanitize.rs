//! Widget-state scrubbing.
//!
//! Removes two kinds of interactive-widget residue from a parsed notebook:
//! the top-level `metadata.widgets` mapping, and any cell output whose
//! `data` mapping carries a widget MIME type. Everything else in the
//! document, including key and element order, is left exactly as authored.

use serde::Serialize;
use serde_json::{Map, Value};

/// MIME-type prefix marking an output produced by an interactive widget.
pub const WIDGET_MIME_PREFIX: &str = "application/vnd.jupyter.widget";

/// What a scrub pass removed from the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    /// `metadata.widgets` was present and has been removed.
    pub top_level_widgets: bool,
    /// Number of cell outputs dropped for carrying widget MIME data.
    pub cell_outputs_removed: usize,
}

impl ChangeSummary {
    /// True when the scrub removed nothing.
    pub const fn unchanged(&self) -> bool {
        !self.top_level_widgets && self.cell_outputs_removed == 0
    }
}

/// Strip widget state from a notebook in place.
///
/// Deterministic and free of side effects beyond the document itself.
/// Absent `metadata` or `cells` mean "nothing to remove", never an error;
/// cells are never removed or reordered, and surviving outputs keep their
/// relative order. The `metadata` member is always (re-)attached, so a
/// document without one gains an empty mapping.
pub fn sanitize(notebook: &mut Map<String, Value>) -> ChangeSummary {
    let mut summary = ChangeSummary::default();

    let metadata = notebook
        .entry("metadata")
        .or_insert_with(|| Value::Object(Map::new()));
    if let Value::Object(metadata) = metadata
        // shift_remove: plain remove would swap the last key into the gap
        && metadata.shift_remove("widgets").is_some()
    {
        summary.top_level_widgets = true;
    }

    if let Some(Value::Array(cells)) = notebook.get_mut("cells") {
        for cell in cells {
            if let Value::Object(cell) = cell {
                summary.cell_outputs_removed += strip_widget_outputs(cell);
            }
        }
    }

    summary
}

/// Drop widget-MIME outputs from one cell, returning how many were removed.
fn strip_widget_outputs(cell: &mut Map<String, Value>) -> usize {
    let Some(Value::Array(outputs)) = cell.get_mut("outputs") else {
        return 0;
    };
    let before = outputs.len();
    outputs.retain(|output| !has_widget_data(output));
    before - outputs.len()
}

/// An output is widget residue if any key of its `data` mapping starts with
/// the widget MIME prefix. Literal, case-sensitive prefix comparison.
#[inline]
fn has_widget_data(output: &Value) -> bool {
    match output.get("data") {
        Some(Value::Object(data)) => data.keys().any(|k| k.starts_with(WIDGET_MIME_PREFIX)),
        _ => false,
    }
}
