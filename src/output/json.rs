//! JSON report output writer.
//!
//! Writes the aggregated namespace tree as a versioned JSON document.

use super::validate_path;
use crate::aggregator::Node;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Listings the references were read from
    pub source: Vec<String>,

    /// Total method references counted
    pub total_methods: u64,

    /// Timestamp when report was generated
    pub generated_at: String,

    /// Top-level namespaces, sorted by name
    pub packages: Vec<Node>,
}

impl PackageReport {
    /// Build a report from an aggregated root
    pub fn from_tree(root: &Node, source: Vec<String>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            source,
            total_methods: root.total_count,
            generated_at: chrono::Utc::now().to_rfc3339(),
            packages: root.sorted_children().cloned().collect(),
        }
    }

    /// Look up a node by its path of display names
    pub fn find(&self, path: &[&str]) -> Option<&Node> {
        let (first, rest) = path.split_first()?;
        let top = self.packages.iter().find(|n| n.name == *first)?;
        rest.iter().try_fold(top, |node, name| node.child(name))
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let report = PackageReport::from_tree(&root, vec!["classes.txt".into()]);
/// write_report(&report, "counts.json")?;
/// ```
pub fn write_report(report: &PackageReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON report to: {}", output_path.display());

    validate_path(output_path)?;
    super::create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    debug!(
        "JSON report written ({} top-level packages)",
        report.packages.len()
    );

    Ok(())
}

/// Read a report from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<PackageReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: PackageReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(report)
}
