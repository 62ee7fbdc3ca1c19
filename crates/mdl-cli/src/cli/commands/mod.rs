//! CLI command handlers. Each command is in its own file.

mod batch;
mod check;
mod completions;
mod parse;
mod providers;
mod resolve;
mod sanitize;

pub use batch::run_batch;
pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use parse::run_parse;
#[cfg(test)]
pub(crate) use parse::render_text;
pub use providers::run_providers;
pub use resolve::run_resolve;
pub use sanitize::run_sanitize;
