//! Configuration and constants for the CLI.
//!
//! The well-known prefix set is a plain value owned by the compactor; this
//! module only supplies the defaults and the optional TOML overrides.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Spaces per depth level in the rendered tree
pub const INDENT_WIDTH: usize = 4;

/// Label of the tree root. Never rendered.
pub const ROOT_NAME: &str = "<root>";

/// Label used for classes that live in the unnamed package
pub const DEFAULT_PACKAGE_NAME: &str = "<default>";

/// Organizational package roots that carry no signal on their own.
///
/// Multi-segment entries match after the first segment has already been
/// merged into its child (`com` + `google` -> `com.google`).
pub const DEFAULT_COMMON_PREFIXES: &[&str] = &[
    "com",
    "com.github",
    "com.squareup",
    "com.futuresimple",
    "com.getbase",
    "com.getbase.android",
    "com.google",
    "com.commonsware",
    "com.commonsware.cwac",
    "org",
    "org.chalup",
    "org.apache",
    "org.joda",
    "net",
    "net.sourceforge",
];

/// Top-level config file structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub compaction: CompactionConfig,
}

/// `[compaction]` section
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompactionConfig {
    /// Replaces the default prefix set when present
    pub common_prefixes: Option<Vec<String>>,

    /// Added on top of whichever set is active
    #[serde(default)]
    pub extra_prefixes: Vec<String>,
}

impl CompactionConfig {
    /// Resolve the effective prefix set
    ///
    /// `use_defaults = false` starts from an empty set instead of
    /// [`DEFAULT_COMMON_PREFIXES`] when the file does not replace it.
    pub fn prefixes(&self, use_defaults: bool) -> BTreeSet<String> {
        let mut prefixes: BTreeSet<String> = match &self.common_prefixes {
            Some(list) => list.iter().cloned().collect(),
            None if use_defaults => default_prefixes(),
            None => BTreeSet::new(),
        };
        prefixes.extend(self.extra_prefixes.iter().cloned());
        prefixes
    }
}

/// The built-in prefix set as owned strings
pub fn default_prefixes() -> BTreeSet<String> {
    DEFAULT_COMMON_PREFIXES
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Load a config file
///
/// # Errors
/// * `ConfigError::ReadFailed` - If file cannot be read
/// * `ConfigError::InvalidToml` - If TOML is invalid
///
/// # Example
/// ```ignore
/// let config = load_config("dex-method-counts.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}
