//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod init;
pub mod query;

pub use args::{BuildArgs, CheckArgs, Cli, Commands, QueryArgs};
