//! Implementation of the `envsub check` command.

use std::fs;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use serde::Serialize;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Files to check (.env)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of checking a single file.
#[derive(Debug, Serialize)]
struct FileDiagnostic {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut diagnostics = Vec::new();
    for path in &args.files {
        let outcome = fs::read_to_string(path)
            .map_err(|e| format!("could not read {}: {}", path.display(), e))
            .and_then(|text| match envsub::parse(&text) {
                Ok(_) => Ok(()),
                Err(e) => Err(e.to_string()),
            });
        diagnostics.push(FileDiagnostic {
            file: path.display().to_string(),
            ok: outcome.is_ok(),
            error: outcome.err(),
        });
    }

    let failed = diagnostics.iter().filter(|d| !d.ok).count();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&diagnostics)
                .expect("JSON serialization should not fail")
        );
    } else {
        for diagnostic in &diagnostics {
            if diagnostic.ok {
                println!("{} {}", "ok".green(), diagnostic.file);
            } else {
                println!(
                    "{} {}: {}",
                    "error".red(),
                    diagnostic.file,
                    diagnostic.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    if failed == 0 {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
