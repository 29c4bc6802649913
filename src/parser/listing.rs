//! Reading method-reference listings from files or stdin.
//!
//! A multi-dex application produces one listing per dex file; callers pass
//! all of them and get back one concatenated sequence.

use super::method_ref::{parse_line, MethodRef};
use crate::utils::error::ParseError;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Path that selects standard input
pub const STDIN_PATH: &str = "-";

/// Parse a listing from any buffered reader
///
/// Blank lines and `#` comments are skipped.
///
/// # Errors
/// * `ParseError::ReadFailed` - I/O error while reading
/// * `ParseError::InvalidLine` - A line is not a method reference
pub fn parse_listing(source_name: &str, reader: impl BufRead) -> Result<Vec<MethodRef>, ParseError> {
    let mut refs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|error| ParseError::ReadFailed {
            source_name: source_name.to_string(),
            error,
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let method_ref = parse_line(trimmed).map_err(|reason| ParseError::InvalidLine {
            source_name: source_name.to_string(),
            line: idx + 1,
            reason,
        })?;
        refs.push(method_ref);
    }

    debug!("Parsed {} method references from {}", refs.len(), source_name);

    Ok(refs)
}

/// Read a single listing file (`-` for stdin)
pub fn read_listing(path: impl AsRef<Path>) -> Result<Vec<MethodRef>, ParseError> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    if path.as_os_str() == STDIN_PATH {
        let stdin = io::stdin();
        return parse_listing("<stdin>", stdin.lock());
    }

    let file = File::open(path).map_err(|error| ParseError::ReadFailed {
        source_name: source_name.clone(),
        error,
    })?;

    parse_listing(&source_name, BufReader::new(file))
}

/// Read and concatenate several listings in order
pub fn read_listings<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<MethodRef>, ParseError> {
    let mut all_refs = Vec::new();

    for path in paths {
        let refs = read_listing(path)?;
        info!(
            "Loaded {} method references from {}",
            refs.len(),
            path.as_ref().display()
        );
        all_refs.extend(refs);
    }

    Ok(all_refs)
}
