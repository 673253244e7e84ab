//! CLI argument parsing for scaffolder

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sc")]
#[command(author, version, about = "Component source scaffolder for the folder manager UI", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List built-in templates
    List,

    /// Print a template's content
    Cat {
        /// Template name
        #[arg(required = true)]
        name: String,
    },

    /// Write a template to a destination path
    Emit {
        /// Template name
        #[arg(required = true)]
        name: String,

        /// Destination file path
        #[arg(required = true)]
        dest: PathBuf,

        /// Create missing parent directories
        #[arg(short, long)]
        parents: bool,
    },

    /// Write every template into a target root
    Scaffold {
        /// Target root (defaults to the configured output root)
        root: Option<PathBuf>,
    },
}
