//! CLI subcommand implementations.

mod check;
mod get;
mod print;

pub use check::{run_check, CheckArgs};
pub use get::{run_get, GetArgs};
pub use print::{run_print, PrintArgs};
