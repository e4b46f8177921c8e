//! CLI argument parsing for regform.

mod args;

pub use args::{parse_args, print_usage};
