//! Plain-text report rendering.
//!
//! Layout:
//! ```text
//! android: 12
//!     support.v4: 10
//! kotlin: 3
//!
//! Method usage by top level packages:
//! android: 12
//! kotlin: 3
//!
//! Total method count: 15
//! ```

use super::{create_parent_dirs, validate_path};
use crate::aggregator::Node;
use crate::utils::config::INDENT_WIDTH;
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Header of the top-level section
pub const TOP_LEVEL_HEADER: &str = "Method usage by top level packages:";

/// Write the full report for an aggregated tree
pub fn render_report<W: Write>(root: &Node, out: &mut W) -> io::Result<()> {
    render_tree(root, out)?;
    writeln!(out)?;
    render_top_level(root, out)?;
    writeln!(out)?;
    writeln!(out, "Total method count: {}", root.total_count)?;
    Ok(())
}

/// Render the report into a string
pub fn report_to_string(root: &Node) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = render_report(root, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Write the text report to a file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is invalid
pub fn write_text_report(root: &Node, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing text report to: {}", output_path.display());

    validate_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    render_report(root, &mut writer)?;
    writer.flush()?;

    Ok(())
}

/// Indented tree; the root has no line of its own
pub fn render_tree<W: Write>(root: &Node, out: &mut W) -> io::Result<()> {
    for child in root.sorted_children() {
        render_node(child, 0, out)?;
    }
    Ok(())
}

fn render_node<W: Write>(node: &Node, level: usize, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "{:indent$}{}: {}",
        "",
        node.name,
        node.total_count,
        indent = level * INDENT_WIDTH
    )?;

    for child in node.sorted_children() {
        render_node(child, level + 1, out)?;
    }
    Ok(())
}

/// Header plus one line per top-level namespace
pub fn render_top_level<W: Write>(root: &Node, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", TOP_LEVEL_HEADER)?;
    for child in root.sorted_children() {
        writeln!(out, "{}: {}", child.name, child.total_count)?;
    }
    Ok(())
}
