//! CLI command handlers. Each command is in its own file.

mod build;
mod check_redirect;
mod dev_portal;
mod merge;
mod origins;
mod sanitize;

pub use build::{run_build, BuildArgs};
pub use check_redirect::run_check_redirect;
pub use dev_portal::run_dev_portal;
pub use merge::run_merge;
pub use origins::run_origins;
pub use sanitize::run_sanitize;
