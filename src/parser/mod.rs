//! Method-reference listing parsing.
//!
//! This module handles:
//! - Converting dex type descriptors to dotted class names
//! - Parsing listing lines into method references
//! - Concatenating listings from several dex files

pub mod listing;
pub mod method_ref;

// Re-export main types
pub use listing::{parse_listing, read_listing, read_listings, STDIN_PATH};
pub use method_ref::{descriptor_to_dot, package_name_only, parse_line, MethodRef};
