//! CLI module for skills-tui

mod args;

pub use args::{parse_args, CliConfig};
