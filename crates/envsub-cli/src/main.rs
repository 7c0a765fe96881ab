//! envsub CLI entry point.
//!
//! Provides command-line tools for working with `.env` files:
//! - `envsub check` - Validate `.env` file syntax
//! - `envsub print` - Show the resolved key/value map
//! - `envsub get` - Read one resolved value

mod commands;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_check, run_get, run_print, CheckArgs, GetArgs, PrintArgs};

/// `.env` file tools.
#[derive(Debug, Parser)]
#[command(name = "envsub")]
#[command(about = "Parse, check, and resolve .env files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check .env file syntax
    Check(CheckArgs),
    /// Print the resolved key/value map of a .env file
    Print(PrintArgs),
    /// Print one resolved value from a .env file
    Get(GetArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Print(args) => run_print(args),
        Commands::Get(args) => run_get(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
