//! Terminal surface: dialoguer menus for interactive use and a line-based script
//! shell for automation.

pub mod core;
pub mod input;
pub mod menus;
pub mod output;
mod shell;

pub use shell::{run_cli, SCRIPT_ENV};
