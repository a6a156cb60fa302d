// SPDX-License-Identifier: AGPL-3.0-or-later
//! CLI argument parsing
//!
//! Every command takes a roadmap document path; `-` reads from stdin.
//! Global flags (--config, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use roadmap_core::OutputFormat;

/// Roadmap - validate and render learning roadmap outlines
#[derive(Parser, Debug)]
#[command(name = "roadmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML file with render settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a roadmap document against the schema
    Validate {
        /// Roadmap JSON file, or - for stdin
        input: PathBuf,
    },

    /// Validate and print a rendering of the roadmap
    Render {
        /// Roadmap JSON file, or - for stdin
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "tree")]
        format: FormatArg,
    },

    /// Validate and write roadmap artifacts to a directory
    Export {
        /// Roadmap JSON file, or - for stdin
        input: PathBuf,

        /// Directory for the JSON and diagram files
        #[arg(short, long, default_value = "output")]
        output_dir: PathBuf,

        /// Also write the ASCII tree
        #[arg(long)]
        tree: bool,
    },

    /// Validate and print the roadmap with its diagram as one JSON object
    Bundle {
        /// Roadmap JSON file, or - for stdin
        input: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Tree,
    Mermaid,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tree => OutputFormat::Tree,
            FormatArg::Mermaid => OutputFormat::Mermaid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_render_defaults_to_tree() {
        let cli = Cli::parse_from(["roadmap", "render", "plan.json"]);
        match cli.command {
            Commands::Render { input, format } => {
                assert_eq!(input, PathBuf::from("plan.json"));
                assert_eq!(format, FormatArg::Tree);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "roadmap", "export", "-", "--tree", "-vv", "--config", "roadmap.toml",
        ]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("roadmap.toml")));
        match cli.command {
            Commands::Export {
                output_dir, tree, ..
            } => {
                assert_eq!(output_dir, PathBuf::from("output"));
                assert!(tree);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_format_arg_maps_to_output_format() {
        assert_eq!(OutputFormat::from(FormatArg::Mermaid), OutputFormat::Mermaid);
    }
}
