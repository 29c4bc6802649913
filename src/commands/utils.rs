use crate::utils::config::{SCHEMA_VERSION, DEFAULT_COMMON_PREFIXES};

/// Display version information
pub fn display_version() {
    println!("DEX per-package method counts v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Counts referenced methods per Java package of an Android app.");
}

/// Display the built-in well-known prefix set
pub fn display_prefixes() {
    println!("Built-in common package prefixes:");
    for prefix in DEFAULT_COMMON_PREFIXES {
        println!("  {}", prefix);
    }
}
