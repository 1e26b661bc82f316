//! Line-oriented shell over a [`Session`](crate::session::Session).

mod commands;
mod context;
mod help;
pub mod output;
mod shell;

pub use context::{CliMode, ShellContext};
pub use shell::run_cli;
