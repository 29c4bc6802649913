//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod count;
pub mod utils;

// Re-export main command functions
pub use count::{execute_count, execute_count_to, resolve_compactor, validate_args, CountArgs};
pub use utils::{display_prefixes, display_version};
