//! Implementation of the `envsub get` command.

use std::path::PathBuf;

/// Arguments for the get command.
#[derive(Debug, clap::Args)]
pub struct GetArgs {
    /// File to resolve (.env)
    pub file: PathBuf,

    /// Key to look up after resolution
    pub key: String,
}

/// Run the get command.
pub fn run_get(args: GetArgs) -> miette::Result<i32> {
    let vars = envsub::load_path(&args.file).map_err(|e| miette::miette!("{}", e))?;

    match vars.get(&args.key) {
        Some(value) => {
            println!("{}", value);
            Ok(exitcode::OK)
        }
        None => {
            eprintln!("key '{}' not found in {}", args.key, args.file.display());
            Ok(exitcode::DATAERR)
        }
    }
}
