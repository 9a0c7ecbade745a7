//! CLI argument parsing for the taller TUI.

mod args;

pub use args::{parse_args, CliConfig, VERSION};
