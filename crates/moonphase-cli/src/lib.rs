// moonphase CLI: the presentation layer over the staged calculation runtime.
//
// stdout carries only the final result (plain or JSON) so it can be piped;
// stage progress and logs go to stderr.

mod args;
mod commands;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
