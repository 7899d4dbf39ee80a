//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use mcp_tools::{Capability, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

/// Generate the MCP tool strategy document and availability listing
#[derive(Parser, Debug)]
#[command(name = "detect-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run (defaults to `generate`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write mcp-strategy.md and mcp-tools.txt
    ///
    /// Examples:
    ///   detect-mcp                          # Built-in table into .gemini/
    ///   detect-mcp generate -o docs         # Into docs/
    ///   detect-mcp generate -r tools.toml   # From a registry file
    Generate(GenerateArgs),

    /// Print the availability listing
    List {
        /// Registry file (TOML, JSON or YAML) instead of the built-in table
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Only list tools with this capability (reasoning, research, planning, analysis, debug)
        #[arg(short, long)]
        capability: Option<Capability>,
    },

    /// Check that every declared fallback names a registered tool
    Check {
        /// Registry file (TOML, JSON or YAML) instead of the built-in table
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },
}

/// Arguments for `generate`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Directory to write the artifacts into (must exist)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Registry file (TOML, JSON or YAML) instead of the built-in table
    #[arg(short, long)]
    pub registry: Option<PathBuf>,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            registry: None,
        }
    }
}
