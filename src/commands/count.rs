//! Count command implementation.
//!
//! The count command:
//! 1. Resolves the compaction prefix set
//! 2. Reads and concatenates method-reference listings
//! 3. Builds the namespace tree
//! 4. Compacts and aggregates it
//! 5. Writes the text report (and optionally JSON)

use crate::aggregator::{aggregate_counts, build_from_refs, Compactor, Node, TreeStats};
use crate::output::{render_report, write_report, write_text_report, PackageReport};
use crate::parser::read_listings;
use crate::utils::config::{load_config, Config};
use anyhow::{Context, Result};
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the count command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CountArgs {
    /// Method-reference listings, one per dex file (`-` for stdin)
    pub inputs: Vec<PathBuf>,

    /// Text report destination (None = stdout)
    pub output: Option<PathBuf>,

    /// Optional JSON report destination
    pub output_json: Option<PathBuf>,

    /// Optional TOML config file
    pub config: Option<PathBuf>,

    /// Extra well-known prefixes from the command line
    pub extra_prefixes: Vec<String>,

    /// Start from the built-in prefix set
    pub use_default_prefixes: bool,
}

impl Default for CountArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: None,
            output_json: None,
            config: None,
            extra_prefixes: Vec::new(),
            use_default_prefixes: true,
        }
    }
}

/// Execute the count command, printing to stdout unless `--output` is set
///
/// **Public** - main entry point called from main.rs
pub fn execute_count(args: CountArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute_count_to(&args, &mut handle)?;
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}

/// Execute the count command with a caller-supplied sink for the text report
///
/// # Errors
/// * Config or listing read failures
/// * Malformed listing lines
/// * File write errors
pub fn execute_count_to<W: Write>(args: &CountArgs, sink: &mut W) -> Result<Node> {
    let start_time = Instant::now();

    // Compaction settings
    let compactor = resolve_compactor(args)?;
    debug!("Common prefixes: {:?}", compactor.common_prefixes());

    // Read listings
    info!("Step 1/4: Reading {} listing(s)...", args.inputs.len());
    let refs = read_listings(&args.inputs).context("Failed to read method references")?;

    // Build tree
    info!("Step 2/4: Building namespace tree from {} method references...", refs.len());
    let mut root = build_from_refs(&refs);

    // Compact and aggregate
    info!("Step 3/4: Compacting and aggregating...");
    compactor.compact(&mut root);
    aggregate_counts(&mut root);
    info!("Tree: {}", TreeStats::from_root(&root).summary());

    // Outputs
    info!("Step 4/4: Writing report...");
    match &args.output {
        Some(path) => {
            write_text_report(&root, path).context("Failed to write text report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => {
            writeln!(sink, "Processing {}", source_names(&args.inputs).join(", "))
                .context("Failed to write report")?;
            render_report(&root, sink).context("Failed to write report")?;
        }
    }

    if let Some(json_path) = &args.output_json {
        let report = PackageReport::from_tree(&root, source_names(&args.inputs));
        write_report(&report, json_path).context("Failed to write JSON report")?;
        info!("✓ JSON report written to: {}", json_path.display());
    }

    info!("Count completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(root)
}

/// Combine config file, defaults and CLI prefixes into a compactor
pub fn resolve_compactor(args: &CountArgs) -> Result<Compactor> {
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let mut prefixes = config.compaction.prefixes(args.use_default_prefixes);
    prefixes.extend(args.extra_prefixes.iter().cloned());

    Ok(Compactor::new(prefixes))
}

fn source_names(inputs: &[PathBuf]) -> Vec<String> {
    inputs.iter().map(|p| p.display().to_string()).collect()
}

/// Validate count arguments
///
/// **Public** - can be called before execute_count for early validation
pub fn validate_args(args: &CountArgs) -> Result<()> {
    if args.inputs.is_empty() {
        anyhow::bail!("At least one method-reference listing is required");
    }

    if args.inputs.iter().any(|p| p.as_os_str().is_empty()) {
        anyhow::bail!("Input path cannot be empty");
    }

    if let (Some(text), Some(json)) = (&args.output, &args.output_json) {
        if text == json {
            anyhow::bail!("Text and JSON reports cannot be written to the same file");
        }
    }

    if args.extra_prefixes.iter().any(|p| p.is_empty() || p.starts_with('.') || p.ends_with('.')) {
        anyhow::bail!("Prefixes must be non-empty dotted package names");
    }

    Ok(())
}
