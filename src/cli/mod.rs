//! Interactive shell playing the role of the presentation collaborator:
//! renders views from manager state and issues mutation commands to it.

pub mod commands;
pub mod core;
pub mod output;
pub mod shell;

pub use core::{CliError, CliMode, ShellContext};
pub use shell::run_cli;
