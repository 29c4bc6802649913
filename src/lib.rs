//! DEX Method Counts
//!
//! Per-package method reference counts for Android applications.
//!
//! Method references (read from listings produced by a dex decoder) are
//! grouped into a namespace tree, compacted for readability, and
//! rendered as an indented report with totals per package.
//!
//! ## Getting Started
//!
//! ```bash
//! dex-method-counts count classes.txt classes2.txt
//! ```
//!
//! ```ignore
//! use dex_method_counts::aggregator::{build_methods_tree, Compactor};
//! use dex_method_counts::output::report_to_string;
//!
//! let refs = dex_method_counts::parser::read_listing("classes.txt")?;
//! let root = build_methods_tree(&refs, &Compactor::default());
//! print!("{}", report_to_string(&root));
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;
