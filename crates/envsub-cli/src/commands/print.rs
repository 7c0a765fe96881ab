//! Implementation of the `envsub print` command.

use std::collections::BTreeMap;
use std::path::PathBuf;

use comfy_table::{presets, ContentArrangement, Table};

/// Arguments for the print command.
#[derive(Debug, clap::Args)]
pub struct PrintArgs {
    /// File to resolve (.env)
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the print command.
pub fn run_print(args: PrintArgs) -> miette::Result<i32> {
    let vars = envsub::load_path(&args.file).map_err(|e| miette::miette!("{}", e))?;

    // Sorted for stable output regardless of map iteration order.
    let sorted: BTreeMap<String, String> = vars.into_iter().collect();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&sorted).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_vars_table(&sorted));
    }

    Ok(exitcode::OK)
}

/// Format resolved variables as an ASCII table.
fn format_vars_table(vars: &BTreeMap<String, String>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Value"]);

    for (key, value) in vars {
        table.add_row(vec![key.clone(), value.clone()]);
    }

    table
}
