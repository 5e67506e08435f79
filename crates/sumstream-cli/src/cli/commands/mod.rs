//! CLI command handlers, one per file.

mod check;
mod completions;
mod sum;

pub use check::run_check;
pub use completions::run_completions;
pub use sum::run_sum;
