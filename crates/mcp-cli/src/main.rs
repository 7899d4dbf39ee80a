//! MCP tool detection CLI
//!
//! Renders the MCP tool strategy document and availability listing from
//! the declared tool table.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, GenerateArgs};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = mcp_tools::logging::init(level) {
        eprintln!("{} logging disabled: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!(command = ?cli.command, "starting");

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Generate(GenerateArgs::default()));
    execute_command(command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match cmd {
        Commands::Generate(args) => commands::run_generate(&cwd, &args),
        Commands::List {
            registry,
            capability,
        } => commands::run_list(&cwd, registry.as_deref(), capability),
        Commands::Check { registry } => commands::run_check(&cwd, registry.as_deref()),
    }
}
